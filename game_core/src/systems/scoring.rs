use hecs::World;
use tracing::info;

use crate::{Ball, Events, Paddle, Params, Roster, Score, Side};

/// Check if the ball reached the left or right edge of the arena.
///
/// On a point the scorer's tally goes up by one and every entity is put back
/// to its serve position. Returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    roster: &Roster,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let scorer = {
        let ball = world.query_one_mut::<&Ball>(roster.ball).ok()?;
        if ball.pos.x - ball.radius <= Params::ARENA_MIN {
            Side::Right
        } else if ball.pos.x + ball.radius >= Params::ARENA_MAX {
            Side::Left
        } else {
            return None;
        }
    };

    score.increment(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    info!(?scorer, left = score.left, right = score.right, "point scored");

    reset_entities(world, roster);
    Some(scorer)
}

/// Put both paddles and the ball back to their starting state
pub fn reset_entities(world: &mut World, roster: &Roster) {
    for side in [Side::Left, Side::Right] {
        if let Ok(paddle) = world.query_one_mut::<&mut Paddle>(roster.paddle(side)) {
            paddle.reset();
        }
    }
    if let Ok(ball) = world.query_one_mut::<&mut Ball>(roster.ball) {
        ball.reset();
    }
}
