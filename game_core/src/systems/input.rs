use hecs::World;

use crate::{Paddle, Roster, Side};

/// Discrete commands from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    /// Serve: leave the waiting state
    Start,
}

impl Command {
    /// The paddle this command pushes, and the direction (+1 up, -1 down)
    pub fn paddle(self) -> Option<(Side, i8)> {
        match self {
            Command::LeftUp => Some((Side::Left, 1)),
            Command::LeftDown => Some((Side::Left, -1)),
            Command::RightUp => Some((Side::Right, 1)),
            Command::RightDown => Some((Side::Right, -1)),
            Command::Start => None,
        }
    }

    pub fn up(side: Side) -> Self {
        match side {
            Side::Left => Command::LeftUp,
            Side::Right => Command::RightUp,
        }
    }

    pub fn down(side: Side) -> Self {
        match side {
            Side::Left => Command::LeftDown,
            Side::Right => Command::RightDown,
        }
    }
}

/// Apply a paddle command immediately. Returns false for commands that are
/// not addressed to a paddle.
pub fn apply_paddle_command(world: &mut World, roster: &Roster, command: Command) -> bool {
    let Some((side, dir)) = command.paddle() else {
        return false;
    };

    if let Ok(paddle) = world.query_one_mut::<&mut Paddle>(roster.paddle(side)) {
        if dir > 0 {
            paddle.move_up();
        } else {
            paddle.move_down();
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_entities, Config, Params};

    #[test]
    fn test_commands_reach_the_right_paddle() {
        let mut world = World::new();
        let roster = spawn_entities(&mut world, &Config::new());

        assert!(apply_paddle_command(&mut world, &roster, Command::LeftUp));
        assert!(apply_paddle_command(&mut world, &roster, Command::RightDown));
        assert!(apply_paddle_command(&mut world, &roster, Command::RightDown));

        let left = *world.get::<&Paddle>(roster.left).unwrap();
        let right = *world.get::<&Paddle>(roster.right).unwrap();
        assert_eq!(left.velocity, Params::PADDLE_VELOCITY_STEP);
        assert!((right.velocity + 2.0 * Params::PADDLE_VELOCITY_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_start_is_not_a_paddle_command() {
        let mut world = World::new();
        let roster = spawn_entities(&mut world, &Config::new());

        assert!(!apply_paddle_command(&mut world, &roster, Command::Start));
        assert_eq!(world.get::<&Paddle>(roster.left).unwrap().velocity, 0.0);
    }

    #[test]
    fn test_command_constructors() {
        assert_eq!(Command::up(Side::Left), Command::LeftUp);
        assert_eq!(Command::down(Side::Right), Command::RightDown);
        assert_eq!(Command::RightUp.paddle(), Some((Side::Right, 1)));
    }
}
