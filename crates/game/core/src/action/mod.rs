//! Player actions outside of battle.

pub mod movement;

pub use movement::{CardinalDirection, Step, TileEffect, step};
