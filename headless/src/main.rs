use std::process;

use game_core::Config;
use headless::{DriverConfig, KeyAction, Session};

fn main() {
    tracing_subscriber::fmt::init();

    let config = DriverConfig::default();
    let game_config = Config::default();

    // Validate configuration before starting
    if let Err(e) = config.validate().and_then(|_| game_config.validate()) {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    let mut session = Session::new(config, game_config);

    // Key names on the command line are pressed before play starts
    for key in std::env::args().skip(1) {
        if session.press(&key) == Some(KeyAction::Quit) {
            tracing::info!("quit before serve");
            return;
        }
    }

    tracing::info!("Starting headless match");
    let score = session.run_gated();

    tracing::info!(
        left = score.left,
        right = score.right,
        winner = ?session.winner(),
        ticks = session.game().ticks(),
        "match finished"
    );
}
