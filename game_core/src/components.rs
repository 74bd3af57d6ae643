use glam::Vec2;

use crate::{Config, Params};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for the left side, +1 for the right side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Axis-aligned paddle rectangle; +y is up, so `top > bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleGeometry {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Ball circle for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallGeometry {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // fixed for the paddle's lifetime
    pub y: f32,
    pub half_length: f32,
    pub half_width: f32,
    pub velocity: f32,
    pub velocity_step: f32,
    pub max_velocity: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: 0.0,
            half_length: config.paddle_length / 2.0,
            half_width: config.paddle_width / 2.0,
            velocity: 0.0,
            velocity_step: config.paddle_velocity_step,
            max_velocity: config.paddle_max_velocity,
        }
    }

    /// Advance one tick. Returns true if the paddle hit a wall and stopped.
    ///
    /// A move that would push either end past the arena is discarded and the
    /// paddle stops dead where it is.
    pub fn tick(&mut self) -> bool {
        let new_y = self.y + self.velocity;

        if new_y + self.half_length <= Params::ARENA_MAX
            && new_y - self.half_length >= Params::ARENA_MIN
        {
            self.y = new_y;
            false
        } else {
            self.velocity = 0.0;
            true
        }
    }

    /// Add one velocity step upward. A step landing within half a step of
    /// the cap snaps onto it, so `max_velocity / velocity_step` commands
    /// reach the cap exactly despite f32 accumulation.
    pub fn move_up(&mut self) {
        let v = self.velocity + self.velocity_step;
        self.velocity = if v >= self.max_velocity - self.velocity_step / 2.0 {
            self.max_velocity
        } else {
            v
        };
    }

    pub fn move_down(&mut self) {
        let v = self.velocity - self.velocity_step;
        self.velocity = if v <= -self.max_velocity + self.velocity_step / 2.0 {
            -self.max_velocity
        } else {
            v
        };
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
        self.velocity = 0.0;
    }

    pub fn geometry(&self) -> PaddleGeometry {
        PaddleGeometry {
            left: self.x - self.half_width,
            top: self.y + self.half_length,
            right: self.x + self.half_width,
            bottom: self.y - self.half_length,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub serve: Vec2, // velocity restored on every reset
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        let serve = Vec2::new(config.ball_serve_vx, config.ball_serve_vy);
        Self {
            pos: Vec2::ZERO,
            vel: serve,
            radius: config.ball_radius,
            serve,
        }
    }

    /// Move by one velocity step, then reflect off the top or bottom wall.
    ///
    /// The wall check runs after the move, so the ball may overlap the wall
    /// for a tick. Returns true if it bounced.
    pub fn tick(&mut self) -> bool {
        self.pos += self.vel;

        if self.pos.y + self.radius >= Params::ARENA_MAX
            || self.pos.y - self.radius <= Params::ARENA_MIN
        {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Serve again from the centre
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = self.serve;
    }

    /// True if the ball's horizontal extent `[x - r, x + r]` includes `x`.
    pub fn touches(&self, x: f32) -> bool {
        self.pos.x - self.radius <= x && x <= self.pos.x + self.radius
    }

    /// True if `point` lies inside or on the ball's circle.
    pub fn overlaps_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    pub fn geometry(&self) -> BallGeometry {
        BallGeometry {
            x: self.pos.x,
            y: self.pos.y,
            r: self.radius,
        }
    }
}
