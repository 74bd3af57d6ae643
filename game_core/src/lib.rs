pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::{Entity, World};

/// Handles to the three entities of a match
#[derive(Debug, Clone, Copy)]
pub struct Roster {
    pub left: Entity,
    pub right: Entity,
    pub ball: Entity,
}

impl Roster {
    pub fn paddle(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Advance the deterministic Pong simulation by one tick.
///
/// Returns the side that scored, if any. After a point the entities are
/// already reset and paddle collisions are skipped for this tick.
pub fn step(
    world: &mut World,
    roster: &Roster,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles
    move_paddles(world, roster);

    // 2. Move ball (bounces off top/bottom walls)
    move_ball(world, roster, events);

    // 3. Check scoring (ball reached left/right edge)
    if let Some(scorer) = check_scoring(world, roster, score, events) {
        return Some(scorer);
    }

    // 4. Ball vs paddles
    check_collisions(world, roster, config, events);
    None
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> Entity {
    world.spawn((Ball::new(config),))
}

/// Spawn both paddles and the ball in their serve positions
pub fn spawn_entities(world: &mut World, config: &Config) -> Roster {
    Roster {
        left: create_paddle(world, Side::Left, config),
        right: create_paddle(world, Side::Right, config),
        ball: create_ball(world, config),
    }
}
