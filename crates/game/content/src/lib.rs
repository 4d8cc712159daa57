//! Data-driven content definitions and loaders.
//!
//! This crate houses the bundled story and maps and the file formats around
//! them:
//! - Map layouts (`.map` display grid + `.mapdata` semantics grid)
//! - The story script (RON), one scene per story progress step
//! - Save files (flat text records)
//!
//! Content is read into game-core types and never carries rules of its own.

pub mod loaders;
pub mod story;

pub use loaders::{ContentFactory, LoadResult, MapLoader, SaveError, SaveStore, StoryLoader};
pub use story::{Dialog, Interaction, Scene, Story};
