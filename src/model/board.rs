use serde::{Deserialize, Serialize};

use crate::core::square::CELLS;
use crate::model::{PieceId, EMPTY};

/// Piece ids by square. Serialized as a flat list of 64 ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PieceId>", into = "Vec<PieceId>")]
pub struct Board {
    cells: [PieceId; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [EMPTY; CELLS],
        }
    }

    pub fn from_cells(cells: [PieceId; CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[PieceId; CELLS] {
        &self.cells
    }

    /// Piece id on `square`; off-board squares read as empty.
    #[inline]
    pub fn id_at(&self, square: usize) -> PieceId {
        self.cells.get(square).copied().unwrap_or(EMPTY)
    }

    #[inline]
    pub fn is_occupied(&self, square: usize) -> bool {
        self.id_at(square) != EMPTY
    }

    #[inline]
    pub fn set(&mut self, square: usize, id: PieceId) {
        self.cells[square] = id;
    }

    #[inline]
    pub fn clear(&mut self, square: usize) {
        self.cells[square] = EMPTY;
    }

    pub fn occupied(&self) -> impl Iterator<Item = (usize, PieceId)> + '_ {
        self.cells
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, id)| id != EMPTY)
    }
}

impl From<Board> for Vec<PieceId> {
    fn from(b: Board) -> Self {
        b.cells.to_vec()
    }
}

impl TryFrom<Vec<PieceId>> for Board {
    type Error = String;

    fn try_from(v: Vec<PieceId>) -> Result<Self, Self::Error> {
        let cells: [PieceId; CELLS] = v
            .try_into()
            .map_err(|v: Vec<PieceId>| format!("board must have {CELLS} cells, got {}", v.len()))?;
        Ok(Self { cells })
    }
}
