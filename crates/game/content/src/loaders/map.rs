//! Map data loader.
//!
//! A map named `cave` is two text files in the maps directory:
//! `cave.map` holds what is drawn, `cave.mapdata` holds one semantic tag per
//! cell (`#` wall, `%` interaction, `e` exit, `S` start, ` ` floor).

use std::path::Path;

use anyhow::Context;
use game_core::TileMap;

use crate::loaders::{LoadResult, read_file};

/// Loader for `.map` / `.mapdata` pairs.
pub struct MapLoader;

impl MapLoader {
    /// Load the map `name` from `maps_dir`.
    pub fn load(maps_dir: &Path, name: &str) -> LoadResult<TileMap> {
        let display_path = maps_dir.join(format!("{name}.map"));
        let semantics_path = maps_dir.join(format!("{name}.mapdata"));

        let display = read_file(&display_path)?;
        let semantics = read_file(&semantics_path)?;

        let map = Self::parse(&display, &semantics)
            .with_context(|| format!("Invalid map '{}' in {}", name, maps_dir.display()))?;
        tracing::debug!(map = name, "map loaded");
        Ok(map)
    }

    /// Build a map from the raw text of both files.
    pub fn parse(display: &str, semantics: &str) -> LoadResult<TileMap> {
        let display: Vec<&str> = display.lines().collect();
        let semantics: Vec<&str> = semantics.lines().collect();
        Ok(TileMap::from_grids(&display, &semantics)?)
    }
}
