use std::thread;
use std::time::Instant;

use game_core::{Command, Config, Events, Match, Score, Side};
use tracing::{debug, info};

use crate::{key_action, Bot, DriverConfig, KeyAction, TickGate};

/// A bot-vs-bot match driven one fixed step at a time
pub struct Session {
    game: Match,
    bots: [Bot; 2],
    config: DriverConfig,
}

impl Session {
    pub fn new(config: DriverConfig, game_config: Config) -> Self {
        let bots = [
            Bot::new(Side::Left, config.rng_seed, config.bot_hesitation),
            Bot::new(
                Side::Right,
                config.rng_seed.wrapping_add(1),
                config.bot_hesitation,
            ),
        ];

        Self {
            game: Match::new(game_config),
            bots,
            config,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Feed a key press to the match. Returns the action it mapped to.
    pub fn press(&mut self, key: &str) -> Option<KeyAction> {
        let action = key_action(key)?;
        if let KeyAction::Command(command) = action {
            self.game.apply(command);
        }
        debug!(key, ?action, "key pressed");
        Some(action)
    }

    /// Serve if needed, let both bots steer, then advance one tick.
    pub fn advance(&mut self) -> Events {
        if !self.game.is_running() {
            self.game.apply(Command::Start);
        }

        let ball = self.game.ball();
        for bot in &mut self.bots {
            let paddle = self.game.paddle(bot.side());
            if let Some(command) = bot.decide(&paddle, &ball) {
                self.game.apply(command);
            }
        }

        let events = self.game.tick();
        if let Some(scorer) = events.scorer() {
            let score = self.game.score();
            info!(?scorer, left = score.left, right = score.right, "rally over");
        }
        events
    }

    /// True once a side reaches the points target or the tick budget is spent
    pub fn is_over(&self) -> bool {
        let score = self.game.score();
        [Side::Left, Side::Right]
            .into_iter()
            .any(|side| score.get(side) >= self.config.points_to_win)
            || self.game.ticks() >= self.config.max_ticks
    }

    /// The side ahead once the match is over; `None` while playing or on a
    /// drawn tick budget.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        self.game.score().leader()
    }

    /// Play without waiting between ticks
    pub fn run_to_completion(&mut self) -> Score {
        while !self.is_over() {
            self.advance();
        }
        self.game.score()
    }

    /// Play in real time, one tick per gate interval
    pub fn run_gated(&mut self) -> Score {
        let mut gate = TickGate::new(self.config.tick_interval, Instant::now());

        while !self.is_over() {
            let now = Instant::now();
            if gate.ready(now) {
                self.advance();
            } else {
                thread::sleep(gate.until_next(now));
            }
        }
        self.game.score()
    }
}
