//! Immutable tile maps.
//!
//! A map is a display grid paired with a same-shaped semantics grid. The
//! semantics grid decides how a tile behaves; the display grid is only drawn.
//! Navigation never mutates a map: picking up an item swaps the whole map for
//! a different one.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("map and map data are not the same size: {display:?} vs {semantics:?}")]
    SizeMismatch {
        display: MapDimensions,
        semantics: MapDimensions,
    },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no starting position found")]
    MissingStart,

    #[error("multiple starting positions found: {first} and {second}")]
    MultipleStarts { first: Position, second: Position },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::Empty => "MAP_EMPTY",
            MapError::SizeMismatch { .. } => "MAP_SIZE_MISMATCH",
            MapError::RaggedRow { .. } => "MAP_RAGGED_ROW",
            MapError::MissingStart => "MAP_MISSING_START",
            MapError::MultipleStarts { .. } => "MAP_MULTIPLE_STARTS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl MapDimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Behaviour tag of a single cell in the semantics grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemanticTile {
    /// `#`
    Wall,
    /// `%`, triggers a story interaction.
    Special,
    /// `e`
    Exit,
    /// `S`
    Start,
    /// ` `
    Floor,
    /// Unrecognised tag, walkable.
    Other(char),
}

impl SemanticTile {
    pub const fn from_char(ch: char) -> Self {
        match ch {
            '#' => SemanticTile::Wall,
            '%' => SemanticTile::Special,
            'e' => SemanticTile::Exit,
            'S' => SemanticTile::Start,
            ' ' => SemanticTile::Floor,
            other => SemanticTile::Other(other),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            SemanticTile::Wall => '#',
            SemanticTile::Special => '%',
            SemanticTile::Exit => 'e',
            SemanticTile::Start => 'S',
            SemanticTile::Floor => ' ',
            SemanticTile::Other(ch) => ch,
        }
    }

    pub const fn is_passable(self) -> bool {
        !matches!(self, SemanticTile::Wall)
    }
}

/// Display grid plus semantics grid, validated at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    display: Vec<Vec<char>>,
    semantics: Vec<Vec<SemanticTile>>,
    dimensions: MapDimensions,
    start: Position,
}

impl TileMap {
    /// Builds a map from row strings.
    ///
    /// Both grids must be rectangular and share dimensions, and the semantics
    /// grid must carry exactly one `S` tile.
    pub fn from_grids<D, S>(display: &[D], semantics: &[S]) -> Result<Self, MapError>
    where
        D: AsRef<str>,
        S: AsRef<str>,
    {
        let display: Vec<Vec<char>> = display
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let raw_semantics: Vec<Vec<char>> = semantics
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let display_dims = grid_dimensions(&display)?;
        let semantic_dims = grid_dimensions(&raw_semantics)?;
        if display_dims != semantic_dims {
            return Err(MapError::SizeMismatch {
                display: display_dims,
                semantics: semantic_dims,
            });
        }

        let semantics: Vec<Vec<SemanticTile>> = raw_semantics
            .iter()
            .map(|row| row.iter().copied().map(SemanticTile::from_char).collect())
            .collect();
        let start = find_start(&semantics)?;

        tracing::debug!(
            rows = display_dims.rows,
            cols = display_dims.cols,
            %start,
            "tile map constructed"
        );

        Ok(Self {
            display,
            semantics,
            dimensions: display_dims,
            start,
        })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// The unique `S` cell.
    pub fn starting_position(&self) -> Position {
        self.start
    }

    pub fn semantic_at(&self, position: Position) -> Option<SemanticTile> {
        self.semantics.get(position.row)?.get(position.col).copied()
    }

    pub fn display_at(&self, position: Position) -> Option<char> {
        self.display.get(position.row)?.get(position.col).copied()
    }

    pub fn display_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.display.iter().map(|row| row.iter().collect())
    }

    pub fn display_text(&self) -> String {
        self.display_rows().collect::<Vec<_>>().join("\n")
    }
}

fn grid_dimensions(grid: &[Vec<char>]) -> Result<MapDimensions, MapError> {
    let first = grid.first().ok_or(MapError::Empty)?;
    let cols = first.len();
    if cols == 0 {
        return Err(MapError::Empty);
    }
    if let Some((row, found)) = grid
        .iter()
        .enumerate()
        .map(|(row, cells)| (row, cells.len()))
        .find(|(_, len)| *len != cols)
    {
        return Err(MapError::RaggedRow {
            row,
            expected: cols,
            found,
        });
    }
    Ok(MapDimensions::new(grid.len(), cols))
}

fn find_start(semantics: &[Vec<SemanticTile>]) -> Result<Position, MapError> {
    let mut starts = semantics.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == SemanticTile::Start)
            .map(move |(col, _)| Position::new(row, col))
    });

    let first = starts.next().ok_or(MapError::MissingStart)?;
    match starts.next() {
        Some(second) => Err(MapError::MultipleStarts { first, second }),
        None => Ok(first),
    }
}
