/// Game tuning parameters for Pong
///
/// The arena is the normalized square `[-1, 1] x [-1, 1]` with +y pointing up.
/// All speeds are in arena units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_MIN: f32 = -1.0;
    pub const ARENA_MAX: f32 = 1.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.05;
    pub const PADDLE_LENGTH: f32 = 0.30;
    pub const PADDLE_OFFSET: f32 = 0.80; // distance of paddle centre from x = 0
    pub const PADDLE_VELOCITY_STEP: f32 = 0.005; // per up/down command
    pub const PADDLE_MAX_VELOCITY: f32 = 0.4;

    // Ball
    pub const BALL_RADIUS: f32 = 0.05;
    pub const BALL_SERVE_VX: f32 = 0.015;
    pub const BALL_SERVE_VY: f32 = 0.002;

    // Fraction of paddle velocity added to the ball's vy on contact
    pub const VELOCITY_TRANSFER: f32 = 0.3;

    // Driver
    pub const MILLIS_PER_TICK: u64 = 10;
}
