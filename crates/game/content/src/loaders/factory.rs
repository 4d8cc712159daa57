//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::TileMap;

use crate::loaders::{LoadResult, MapLoader, StoryLoader};
use crate::story::Story;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── story.ron
/// └── maps/
///     ├── cave.map
///     ├── cave.mapdata
///     ├── cave_no_sword.map
///     └── cave_no_sword.mapdata
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Content shipped with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load the story script from `story.ron`.
    pub fn load_story(&self) -> LoadResult<Story> {
        StoryLoader::load(&self.data_dir.join("story.ron"))
    }

    /// Load a map from `maps/`.
    pub fn load_map(&self, name: &str) -> LoadResult<TileMap> {
        MapLoader::load(&self.data_dir.join("maps"), name)
    }

    /// Loads the story and every map it names, so broken content fails at
    /// startup instead of mid-game.
    pub fn load_validated_story(&self) -> LoadResult<Story> {
        let story = self.load_story()?;
        for name in story.map_names() {
            self.load_map(name)
                .with_context(|| format!("Story refers to unusable map '{name}'"))?;
        }
        Ok(story)
    }
}
