//! Tile-driven movement.
//!
//! `step` is the whole navigation state machine: the only state is the
//! player's position, and the landing effect is recomputed on every attempt.

use crate::env::{SemanticTile, TileMap};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    /// Returns the (row, col) offset. Rows grow downward.
    pub fn delta(self) -> (isize, isize) {
        match self {
            CardinalDirection::Up => (-1, 0),
            CardinalDirection::Down => (1, 0),
            CardinalDirection::Left => (0, -1),
            CardinalDirection::Right => (0, 1),
        }
    }
}

/// What the caller must react to after a move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileEffect {
    /// The destination was a wall; the player did not move.
    Blocked,
    Normal,
    /// Landed on a `%` interaction tile.
    Special,
    /// Landed on an `e` tile.
    Exit,
}

impl TileEffect {
    /// Legacy signal: `1` special, `-1` exit, `0` otherwise.
    pub const fn code(self) -> i8 {
        match self {
            TileEffect::Special => 1,
            TileEffect::Exit => -1,
            TileEffect::Blocked | TileEffect::Normal => 0,
        }
    }

    fn from_tile(tile: SemanticTile) -> Self {
        match tile {
            SemanticTile::Special => TileEffect::Special,
            SemanticTile::Exit => TileEffect::Exit,
            SemanticTile::Wall => TileEffect::Blocked,
            SemanticTile::Start | SemanticTile::Floor | SemanticTile::Other(_) => {
                TileEffect::Normal
            }
        }
    }
}

/// Result of one move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub position: Position,
    pub effect: TileEffect,
}

/// Applies `direction` to `position` on `map`.
///
/// Moves that would leave the grid are clamped to the edge in that axis.
/// A wall destination leaves the position unchanged. Deterministic.
pub fn step(map: &TileMap, position: Position, direction: CardinalDirection) -> Step {
    let dims = map.dimensions();
    let (dr, dc) = direction.delta();
    let candidate = Position::new(
        clamp_axis(position.row, dr, dims.rows),
        clamp_axis(position.col, dc, dims.cols),
    );

    // A position outside the map can only come from a caller using a stale
    // map; treat it like a wall.
    let tile = map.semantic_at(candidate).unwrap_or(SemanticTile::Wall);
    let effect = TileEffect::from_tile(tile);
    if effect == TileEffect::Blocked {
        tracing::trace!(from = %position, to = %candidate, "move blocked");
        return Step { position, effect };
    }

    Step {
        position: candidate,
        effect,
    }
}

fn clamp_axis(value: usize, delta: isize, extent: usize) -> usize {
    let max = extent.saturating_sub(1);
    value.saturating_add_signed(delta).min(max)
}
