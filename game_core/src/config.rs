use crate::{Params, Side};

/// What the match does after a point has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Return to `Waiting`; the next serve needs a fresh start command.
    #[default]
    Pause,
    /// Keep running; the ball is served again on the next tick.
    KeepRunning,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_length: f32,
    pub paddle_offset: f32,
    pub paddle_velocity_step: f32,
    pub paddle_max_velocity: f32,
    pub ball_radius: f32,
    pub ball_serve_vx: f32,
    pub ball_serve_vy: f32,
    pub velocity_transfer: f32,
    pub reset_policy: ResetPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_velocity_step: Params::PADDLE_VELOCITY_STEP,
            paddle_max_velocity: Params::PADDLE_MAX_VELOCITY,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_vx: Params::BALL_SERVE_VX,
            ball_serve_vy: Params::BALL_SERVE_VY,
            velocity_transfer: Params::VELOCITY_TRANSFER,
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        side.sign() * self.paddle_offset
    }

    /// Reject configurations that cannot fit inside the arena.
    pub fn validate(&self) -> Result<(), String> {
        let arena = Params::ARENA_MAX - Params::ARENA_MIN;

        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err("ball_radius must be finite and > 0".to_string());
        }
        if !self.paddle_width.is_finite() || self.paddle_width <= 0.0 {
            return Err("paddle_width must be finite and > 0".to_string());
        }
        if !self.paddle_length.is_finite() || self.paddle_length <= 0.0 {
            return Err("paddle_length must be finite and > 0".to_string());
        }
        if self.paddle_length > arena {
            return Err("paddle_length must fit inside the arena".to_string());
        }
        if !self.paddle_offset.is_finite()
            || self.paddle_offset + self.paddle_width / 2.0 > Params::ARENA_MAX
        {
            return Err("paddle_offset must keep the paddle inside the arena".to_string());
        }
        if !self.paddle_velocity_step.is_finite() || self.paddle_velocity_step <= 0.0 {
            return Err("paddle_velocity_step must be finite and > 0".to_string());
        }
        if !self.paddle_max_velocity.is_finite()
            || self.paddle_max_velocity < self.paddle_velocity_step
        {
            return Err("paddle_max_velocity must be finite and >= paddle_velocity_step".to_string());
        }
        if !self.ball_serve_vx.is_finite() || !self.ball_serve_vy.is_finite() {
            return Err("ball serve velocity must be finite".to_string());
        }
        if !self.velocity_transfer.is_finite() {
            return Err("velocity_transfer must be finite".to_string());
        }
        Ok(())
    }
}
