//! Static inputs the rules read but never mutate: tile maps and the random
//! source.

pub mod map;
pub mod rng;

pub use map::{MapDimensions, MapError, SemanticTile, TileMap};
pub use rng::{PcgRng, RngOracle};
