//! The game state a move runs against: board cells, the piece registry and the
//! entanglement arena.

pub mod board;
pub mod entanglement;
pub mod piece;

pub use board::Board;
pub use entanglement::{Entanglement, Entanglements, RecordId};
pub use piece::{Piece, Pieces};

/// Identifier of a piece. `0` is reserved for "empty square".
pub type PieceId = u32;

/// Board cell value meaning "no piece".
pub const EMPTY: PieceId = 0;
