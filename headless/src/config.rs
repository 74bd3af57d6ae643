use std::time::Duration;

use game_core::Params;

/// Driver configuration
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub tick_interval: Duration,
    pub points_to_win: u32,
    pub max_ticks: u64,
    pub rng_seed: u64,
    /// Chance per tick that a bot does nothing
    pub bot_hesitation: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(Params::MILLIS_PER_TICK),
            points_to_win: 5,
            max_ticks: 200_000,
            rng_seed: 42,
            bot_hesitation: 0.25,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be > 0".to_string());
        }
        if self.points_to_win == 0 {
            return Err("points_to_win must be >= 1".to_string());
        }
        if self.max_ticks == 0 {
            return Err("max_ticks must be >= 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.bot_hesitation) {
            return Err("bot_hesitation must be within [0, 1]".to_string());
        }
        Ok(())
    }
}
