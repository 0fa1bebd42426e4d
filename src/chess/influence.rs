//! Classical reach of a single identity, used to build a piece's area of influence.
//!
//! Unlike move generation, only *occupied* squares are reported: a sliding ray stops at the
//! first occupant (which is included) and leapers/pawns report a target only if it is occupied.

use serde::{Deserialize, Serialize};

use crate::chess::piece::{Color, PieceKind};
use crate::core::coord::Coord;
use crate::core::square::{Square, SIDE};
use crate::model::Board;

/// Variant switches for area-of-influence computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluenceRules {
    /// Keep only same-color occupants among a queen identity's hits.
    pub queen_same_color_only: bool,
}

/// Occupied squares `kind` reaches from `from` on `board`.
pub fn reach(kind: PieceKind, from: Square, color: Color, board: &Board) -> Vec<usize> {
    let mut hits = Vec::new();
    match kind {
        PieceKind::Pawn => push_if_occupied(&mut hits, from, color.forward(), board),
        PieceKind::Knight | PieceKind::King => {
            for &step in kind.leaps() {
                push_if_occupied(&mut hits, from, step, board);
            }
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            for &dir in kind.slide_dirs() {
                if let Some(sq) = first_occupied(from, dir, board) {
                    hits.push(sq.index());
                }
            }
        }
    }
    hits
}

fn push_if_occupied(hits: &mut Vec<usize>, from: Square, step: Coord, board: &Board) {
    if let Some(sq) = from.shifted(step) {
        if board.is_occupied(sq.index()) {
            hits.push(sq.index());
        }
    }
}

/// Walk from `from` along `dir` and return the first occupied square, if any.
fn first_occupied(from: Square, dir: Coord, board: &Board) -> Option<Square> {
    for distance in 1..SIDE as i32 {
        let sq = from.shifted(dir * distance)?;
        if board.is_occupied(sq.index()) {
            return Some(sq);
        }
    }
    None
}
