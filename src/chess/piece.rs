use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, KING_STEPS};

/// Classical identities a quantum piece can be in superposition over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Identity name as it appears in a piece's state space.
    pub fn name(self) -> &'static str {
        use PieceKind::*;
        match self {
            King => "King",
            Queen => "Queen",
            Rook => "Rook",
            Bishop => "Bishop",
            Knight => "Knight",
            Pawn => "Pawn",
        }
    }

    /// Unknown names have no movement pattern.
    pub fn from_name(name: &str) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    /// Single-step offsets for leaping pieces (pawns excluded: they depend on color).
    #[inline]
    pub fn leaps(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            King => &KING_STEPS,
            Knight => &KNIGHT_DELTAS,
            _ => &[],
        }
    }
}

/// Side a piece belongs to. Encoded as `0` (White) / `1` (Black) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// One square forward for a pawn of this color.
    #[inline]
    pub fn forward(self) -> Coord {
        match self {
            Color::White => Coord { x: 0, y: -1 },
            Color::Black => Coord { x: 0, y: 1 },
        }
    }
}

impl From<Color> for u8 {
    fn from(c: Color) -> u8 {
        match c {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Color::White),
            1 => Ok(Color::Black),
            other => Err(format!("invalid color {other}, expected 0 or 1")),
        }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 0, y: -1 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 0 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: 1, y: 1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 0, y: -1 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: 1, y: 1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];
