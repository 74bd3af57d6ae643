use game_core::{Ball, Command, Paddle, Params, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How far from the target the paddle may sit before the bot reacts
const DEADZONE: f32 = 0.03;
/// Desired paddle velocity per unit of distance to the target
const GAIN: f32 = 0.1;

/// Computer opponent steering one paddle with up/down commands
pub struct Bot {
    side: Side,
    hesitation: f64,
    rng: StdRng,
}

impl Bot {
    /// `hesitation` is the chance of skipping a decision; it is clamped to
    /// `0..=1` and NaN counts as never hesitating.
    pub fn new(side: Side, seed: u64, hesitation: f64) -> Self {
        let hesitation = if hesitation.is_nan() {
            0.0
        } else {
            hesitation.clamp(0.0, 1.0)
        };
        Self {
            side,
            hesitation,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Where the paddle should be.
    ///
    /// Strategy:
    /// 1. If the ball is coming at us, predict the y where it reaches our x
    ///    (straight line, wall bounces ignored).
    /// 2. If it is moving away, return to centre to cover maximum area.
    pub fn target_y(&self, paddle: &Paddle, ball: &Ball) -> f32 {
        let approaching = ball.vel.x * self.side.sign() > 0.0;
        if !approaching {
            return 0.0;
        }

        let time_to_reach = (paddle.x - ball.pos.x) / ball.vel.x;
        let predicted_y = ball.pos.y + ball.vel.y * time_to_reach;
        predicted_y.clamp(
            Params::ARENA_MIN + paddle.half_length,
            Params::ARENA_MAX - paddle.half_length,
        )
    }

    /// Pick this tick's command, if any.
    ///
    /// Commands only nudge velocity, so the bot steers the velocity towards
    /// one proportional to the remaining distance.
    pub fn decide(&mut self, paddle: &Paddle, ball: &Ball) -> Option<Command> {
        if self.rng.gen_bool(self.hesitation) {
            return None;
        }

        let diff = self.target_y(paddle, ball) - paddle.y;
        let desired = if diff.abs() <= DEADZONE {
            0.0
        } else {
            (diff * GAIN).clamp(-paddle.max_velocity, paddle.max_velocity)
        };

        let tolerance = paddle.velocity_step / 2.0;
        if paddle.velocity < desired - tolerance {
            Some(Command::up(self.side))
        } else if paddle.velocity > desired + tolerance {
            Some(Command::down(self.side))
        } else {
            None
        }
    }
}
