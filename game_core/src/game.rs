//! Match aggregate
//!
//! Owns the world holding both paddles and the ball, the score, and the
//! waiting/running state machine. Drivers call [`Match::tick`] once per fixed
//! step and read geometry back between ticks.

use glam::Vec2;
use hecs::World;
use tracing::{debug, info, trace};

use crate::{
    apply_paddle_command, check_scoring, reset_entities, spawn_entities, step, Ball,
    BallGeometry, Command, Config, Events, MatchState, Paddle, PaddleGeometry, ResetPolicy,
    Roster, Score, Side, Snapshot,
};

pub struct Match {
    world: World,
    roster: Roster,
    config: Config,
    score: Score,
    events: Events,
    state: MatchState,
    ticks: u64,
}

impl Match {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let roster = spawn_entities(&mut world, &config);

        Self {
            world,
            roster,
            config,
            score: Score::new(),
            events: Events::new(),
            state: MatchState::Waiting,
            ticks: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    /// Number of ticks that actually advanced the simulation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Serve. Returns false if the match was already running.
    pub fn start(&mut self) -> bool {
        if self.state == MatchState::Running {
            return false;
        }
        self.state = MatchState::Running;
        info!(left = self.score.left, right = self.score.right, "match started");
        true
    }

    /// Apply one input command. Paddle commands act immediately, even while
    /// waiting, and accumulate until the next tick.
    pub fn apply(&mut self, command: Command) {
        if command == Command::Start {
            self.start();
        } else {
            apply_paddle_command(&mut self.world, &self.roster, command);
        }
    }

    /// Advance one step. Does nothing unless the match is running, but a
    /// waiting tick still counts as the last tick for [`Match::events`].
    pub fn tick(&mut self) -> Events {
        if !self.is_running() {
            self.events.clear();
            return self.events;
        }

        self.ticks += 1;
        trace!(tick = self.ticks, "tick");

        let scorer = step(
            &mut self.world,
            &self.roster,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        if scorer.is_some() {
            self.after_point();
        }
        self.events
    }

    /// Run the scoring check on the current position without moving anything.
    pub fn check_score(&mut self) -> Option<Side> {
        self.events.clear();
        let scorer = check_scoring(
            &mut self.world,
            &self.roster,
            &mut self.score,
            &mut self.events,
        );
        if scorer.is_some() {
            self.after_point();
        }
        scorer
    }

    /// Put all entities back to their serve positions. Scores are kept.
    pub fn reset(&mut self) {
        reset_entities(&mut self.world, &self.roster);
        self.after_point();
    }

    fn after_point(&mut self) {
        if self.config.reset_policy == ResetPolicy::Pause {
            self.state = MatchState::Waiting;
            debug!("waiting for serve");
        }
    }

    /// Move the ball directly. Used for scripted serves and tests.
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(ball) = self.world.query_one_mut::<&mut Ball>(self.roster.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Copy of the paddle on `side`
    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .get::<&Paddle>(self.roster.paddle(side))
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, &self.config))
    }

    /// Copy of the ball
    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.roster.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(&self.config))
    }

    pub fn left_paddle_geometry(&self) -> PaddleGeometry {
        self.paddle(Side::Left).geometry()
    }

    pub fn right_paddle_geometry(&self) -> PaddleGeometry {
        self.paddle(Side::Right).geometry()
    }

    pub fn ball_geometry(&self) -> BallGeometry {
        self.ball().geometry()
    }

    /// `(left, right)`
    pub fn scores(&self) -> (u32, u32) {
        (self.score.left, self.score.right)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the last tick or score check
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left: self.left_paddle_geometry(),
            right: self.right_paddle_geometry(),
            ball: self.ball_geometry(),
            score: self.score,
            state: self.state,
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
