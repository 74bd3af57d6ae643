//! Headless driver for the Pong simulation
//!
//! Plays the part of the window/input layer: gates ticks to a fixed
//! interval, turns key names into commands, and steers paddles with bots.

pub mod bot;
pub mod config;
pub mod gate;
pub mod keys;
pub mod session;

pub use bot::*;
pub use config::*;
pub use gate::*;
pub use keys::*;
pub use session::*;
