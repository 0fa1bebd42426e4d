//! Decoded wire forms exchanged with the room dispatcher.
//!
//! The transport decodes a [`Move`] and, when state is rebuilt from a message, a [`Snapshot`].
//! After a move the dispatcher serializes a fresh snapshot back out. On the wire every
//! entangled id carries its own copy of the record; [`Snapshot::restore`] rebuilds the shared
//! arena from ids that list the same elements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{Board, Entanglement, Entanglements, Piece, PieceId, Pieces, RecordId, EMPTY};

/// A move as two board indices, `[from, to]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    #[inline]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<[usize; 2]> for Move {
    fn from([from, to]: [usize; 2]) -> Self {
        Self { from, to }
    }
}

impl From<Move> for [usize; 2] {
    fn from(m: Move) -> Self {
        [m.from, m.to]
    }
}

/// Board, pieces and entanglements in their collaborator-facing shape.
///
/// A `None` (or absent) entanglement entry means "not entangled".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board: Board,
    pub pieces: BTreeMap<PieceId, Piece>,
    #[serde(default)]
    pub entanglements: BTreeMap<PieceId, Option<Entanglement>>,
}

impl Snapshot {
    pub fn capture(board: &Board, pieces: &Pieces, entanglements: &Entanglements) -> Self {
        let entanglements = entanglements
            .links()
            .filter_map(|(id, rid)| entanglements.record(rid).map(|r| (id, Some(r.clone()))))
            .collect();
        Self {
            board: board.clone(),
            pieces: pieces.iter().map(|(id, p)| (id, p.clone())).collect(),
            entanglements,
        }
    }

    /// Validate and rebuild the engine-side structures.
    ///
    /// Every board id must be registered, every piece internally consistent, and every record
    /// well formed, listing its own id and only registered pieces.
    pub fn restore(self) -> Result<(Board, Pieces, Entanglements), EngineError> {
        for (_, id) in self.board.occupied() {
            if !self.pieces.contains_key(&id) {
                return Err(EngineError::InvalidPieceAccess(id));
            }
        }
        for piece in self.pieces.values() {
            piece.validate()?;
        }

        let mut entanglements = Entanglements::new();
        let mut shared: BTreeMap<Vec<PieceId>, RecordId> = BTreeMap::new();
        for (id, record) in self.entanglements {
            let Some(record) = record else {
                continue;
            };
            let consistent = id != EMPTY
                && record.is_well_formed()
                && record.contains(id)
                && record.elements.iter().all(|e| self.pieces.contains_key(e));
            if !consistent {
                return Err(EngineError::MalformedEntanglement(id));
            }
            let rid = match shared.get(&record.elements) {
                Some(&rid) => rid,
                None => {
                    let key = record.elements.clone();
                    let rid = entanglements.insert(record);
                    shared.insert(key, rid);
                    rid
                }
            };
            entanglements.link(id, rid);
        }

        Ok((self.board, self.pieces.into_iter().collect(), entanglements))
    }
}
