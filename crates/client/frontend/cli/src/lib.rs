//! Terminal front end for the isekai story.
//!
//! The crate wires `game-content` data into `game-core` rules and draws the
//! result with ratatui. Everything blocks on keyboard input; there is no
//! background work besides the log writer.

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;
mod rng;

pub use app::{AUTOSAVE, CliApp, QuitRequested};
pub use config::{CliConfig, UiConfig};
