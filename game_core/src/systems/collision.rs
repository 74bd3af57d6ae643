use glam::Vec2;
use hecs::World;
use tracing::debug;

use crate::{Ball, Config, Events, Paddle, PaddleGeometry, Roster, Side};

/// Where the ball struck a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The ball centre was level with the paddle's flat face
    Face,
    TopCorner,
    BottomCorner,
}

/// Check the ball against both paddles, left first
pub fn check_collisions(world: &mut World, roster: &Roster, config: &Config, events: &mut Events) {
    for side in [Side::Left, Side::Right] {
        let paddle = match world.get::<&Paddle>(roster.paddle(side)) {
            Ok(paddle) => *paddle,
            Err(_) => continue,
        };

        let ball = match world.query_one_mut::<&mut Ball>(roster.ball) {
            Ok(ball) => ball,
            Err(_) => return, // No ball in world
        };

        if let Some(contact) = resolve_paddle_collision(
            ball,
            paddle.geometry(),
            paddle.velocity,
            config.velocity_transfer,
        ) {
            events.ball_hit_paddle = true;
            events.contact = Some((side, contact));
            debug!(
                ?side,
                ?contact,
                vx = ball.vel.x,
                vy = ball.vel.y,
                "ball hit paddle"
            );
        }
    }
}

/// Bounce the ball off a paddle if they overlap.
///
/// Only the face the ball is travelling towards is considered. A ball whose
/// centre is level with that face reflects horizontally; otherwise it may
/// clip the top or bottom corner of the face, in which case it leaves
/// radially from the corner. Either way `transfer * paddle_velocity` is
/// added to the ball's vertical velocity.
///
/// Overlap is tested on the post-move position only, so a fast enough ball
/// can pass through a paddle between two ticks.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: PaddleGeometry,
    paddle_velocity: f32,
    transfer: f32,
) -> Option<Contact> {
    let edge = if ball.vel.x > 0.0 {
        paddle.left
    } else {
        paddle.right
    };

    // No vertical overlap at all
    if ball.pos.y + ball.radius < paddle.bottom || ball.pos.y - ball.radius > paddle.top {
        return None;
    }

    if !ball.touches(edge) {
        return None;
    }

    let top_corner = Vec2::new(edge, paddle.top);
    let bottom_corner = Vec2::new(edge, paddle.bottom);

    let contact = if paddle.bottom <= ball.pos.y && ball.pos.y <= paddle.top {
        ball.vel.x = -ball.vel.x;
        Contact::Face
    } else if ball.overlaps_point(top_corner) {
        bounce_on_point(ball, top_corner);
        Contact::TopCorner
    } else if ball.overlaps_point(bottom_corner) {
        bounce_on_point(ball, bottom_corner);
        Contact::BottomCorner
    } else {
        return None;
    };

    // TODO: cap ball speed once a maximum is agreed; repeated transfers grow it without bound
    ball.vel.y += transfer * paddle_velocity;

    Some(contact)
}

/// Send the ball directly away from `point`, keeping its speed.
pub fn bounce_on_point(ball: &mut Ball, point: Vec2) {
    let offset = ball.pos - point;
    let angle = offset.y.atan2(offset.x);
    let speed = ball.vel.length();

    ball.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
}
