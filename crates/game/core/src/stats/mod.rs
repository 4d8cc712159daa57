//! Stat derivation for battle participants.

pub mod derived;

pub use derived::LevelStats;
