//! Content loaders for reading game data from files.

pub mod factory;
pub mod map;
pub mod save;
pub mod story;

pub use factory::ContentFactory;
pub use map::MapLoader;
pub use save::{SaveError, SaveStore};
pub use story::StoryLoader;

use std::path::Path;

use anyhow::Context;

/// Result type shared by every loader; errors carry the offending path.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
