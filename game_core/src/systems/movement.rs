use hecs::World;
use tracing::debug;

use crate::{Ball, Events, Paddle, Roster, Side};

/// Advance both paddles by their velocity, right paddle first
pub fn move_paddles(world: &mut World, roster: &Roster) {
    for side in [Side::Right, Side::Left] {
        if let Ok(paddle) = world.query_one_mut::<&mut Paddle>(roster.paddle(side)) {
            if paddle.tick() {
                debug!(?side, y = paddle.y, "paddle stopped at wall");
            }
        }
    }
}

/// Move ball based on velocity, reflecting off the top and bottom walls
pub fn move_ball(world: &mut World, roster: &Roster, events: &mut Events) {
    if let Ok(ball) = world.query_one_mut::<&mut Ball>(roster.ball) {
        if ball.tick() {
            events.ball_hit_wall = true;
            debug!(x = ball.pos.x, y = ball.pos.y, "ball bounced off wall");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_entities, Config};
    use glam::Vec2;

    #[test]
    fn test_move_paddles_applies_velocity() {
        let mut world = World::new();
        let roster = spawn_entities(&mut world, &Config::new());

        world
            .query_one_mut::<&mut Paddle>(roster.left)
            .unwrap()
            .velocity = 0.1;
        world
            .query_one_mut::<&mut Paddle>(roster.right)
            .unwrap()
            .velocity = -0.2;

        move_paddles(&mut world, &roster);

        assert_eq!(world.get::<&Paddle>(roster.left).unwrap().y, 0.1);
        assert_eq!(world.get::<&Paddle>(roster.right).unwrap().y, -0.2);
    }

    #[test]
    fn test_move_ball_flags_wall_bounce() {
        let mut world = World::new();
        let roster = spawn_entities(&mut world, &Config::new());
        let mut events = Events::new();

        {
            let ball = world.query_one_mut::<&mut Ball>(roster.ball).unwrap();
            ball.pos = Vec2::new(0.0, -0.96);
            ball.vel = Vec2::new(0.01, -0.02);
        }

        move_ball(&mut world, &roster, &mut events);

        assert!(events.ball_hit_wall);
        assert!(world.get::<&Ball>(roster.ball).unwrap().vel.y > 0.0);
    }

    #[test]
    fn test_move_ball_without_contact() {
        let mut world = World::new();
        let roster = spawn_entities(&mut world, &Config::new());
        let mut events = Events::new();

        move_ball(&mut world, &roster, &mut events);

        assert!(!events.ball_hit_wall);
        let ball = world.get::<&Ball>(roster.ball).unwrap();
        assert_eq!(ball.pos, ball.serve);
    }
}
