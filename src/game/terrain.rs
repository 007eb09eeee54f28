//! Terrain layer of the board
//!
//! Terrain is fixed when a layout is generated. The player's position is kept
//! separately by the session and only combined with terrain when a cell is
//! viewed, so moving away from a cell never has to restore anything.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::geo::GridCell;

/// Fixed classification of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    /// Safe cell, moving here scores
    #[default]
    Empty,
    /// Moving here ends the game in failure
    Trap,
    /// Moving here ends the game in victory
    Flag,
}

/// What a renderer shows for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellView {
    /// Unoccupied empty terrain
    Empty,
    /// Unoccupied trap
    Trap,
    /// Unoccupied flag
    Flag,
    /// The player's current cell, whatever its terrain
    Player,
}

impl From<TerrainKind> for CellView {
    fn from(kind: TerrainKind) -> Self {
        match kind {
            TerrainKind::Empty => Self::Empty,
            TerrainKind::Trap => Self::Trap,
            TerrainKind::Flag => Self::Flag,
        }
    }
}

/// Square grid of terrain kinds stored row-major (`[row, col]`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    cells: Array2<TerrainKind>,
}

impl Terrain {
    /// All-empty terrain of the given dimension
    pub fn empty(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), TerrainKind::Empty),
        }
    }

    /// Rebuild terrain from nested rows
    ///
    /// Returns `None` unless `rows` is a non-empty square.
    pub fn from_rows(rows: &[Vec<TerrainKind>]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }

        let flat: Vec<TerrainKind> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((size, size), flat)
            .ok()
            .map(|cells| Self { cells })
    }

    /// Grid dimension N
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Terrain at a cell, `None` when off the board
    pub fn get(&self, cell: GridCell) -> Option<TerrainKind> {
        self.cells.get(cell.index()).copied()
    }

    /// Overwrite the terrain at a cell, returning false when off the board
    pub fn set(&mut self, cell: GridCell, kind: TerrainKind) -> bool {
        self.cells.get_mut(cell.index()).is_some_and(|slot| {
            *slot = kind;
            true
        })
    }

    /// Cells holding the given kind, in row-major order
    pub fn cells_of(&self, kind: TerrainKind) -> Vec<GridCell> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == kind)
            .map(|((y, x), _)| GridCell::new(x, y))
            .collect()
    }

    /// Number of cells holding the given kind
    pub fn count(&self, kind: TerrainKind) -> usize {
        self.cells.iter().filter(|&&value| value == kind).count()
    }

    /// Terrain as nested rows, row 0 first
    pub fn to_rows(&self) -> Vec<Vec<TerrainKind>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
