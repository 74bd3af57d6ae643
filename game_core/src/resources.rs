use crate::{BallGeometry, Contact, PaddleGeometry, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The side currently ahead, if any
    pub fn leader(&self) -> Option<Side> {
        if self.left > self.right {
            Some(Side::Left)
        } else if self.right > self.left {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// Entities are static until a start command arrives
    #[default]
    Waiting,
    /// Physics advances on every tick
    Running,
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub contact: Option<(Side, Contact)>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The side that won a point this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Read-only view of the match handed to renderers between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left: PaddleGeometry,
    pub right: PaddleGeometry,
    pub ball: BallGeometry,
    pub score: Score,
    pub state: MatchState,
}
