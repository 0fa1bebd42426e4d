use crate::chess::piece::{Color, PieceKind};
use crate::core::square::{CELLS, SIDE};
use crate::model::{Board, Entanglements, Piece, PieceId, Pieces, EMPTY};

/// Back rank order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; SIDE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Builds the board/pieces/entanglements triple a game starts from.
///
/// Ids are handed out in placement order starting at 1. Nothing starts entangled.
#[derive(Debug, Clone)]
pub struct Setup {
    board: Board,
    pieces: Pieces,
    next_id: PieceId,
}

impl Default for Setup {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            pieces: Pieces::new(),
            next_id: 1,
        }
    }

    /// The classical starting position: Black on rows 0-1, White on rows 6-7, every piece a
    /// single determined identity.
    pub fn classical() -> Self {
        let mut setup = Self::new();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            setup = setup.place(col, Piece::classical(Color::Black, kind));
        }
        for col in 0..SIDE {
            setup = setup.place(SIDE + col, Piece::classical(Color::Black, PieceKind::Pawn));
        }
        for col in 0..SIDE {
            setup = setup.place(6 * SIDE + col, Piece::classical(Color::White, PieceKind::Pawn));
        }
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            setup = setup.place(7 * SIDE + col, Piece::classical(Color::White, kind));
        }
        setup
    }

    /// Put `piece` on `square` under the next free id.
    ///
    /// Panics if the square is off the board or already occupied.
    pub fn place(mut self, square: usize, piece: Piece) -> Self {
        assert!(square < CELLS, "square {square} is off the board");
        assert!(
            self.board.id_at(square) == EMPTY,
            "square {square} is already occupied"
        );
        let id = self.next_id;
        self.next_id += 1;
        self.board.set(square, id);
        self.pieces.insert(id, piece);
        self
    }

    /// Id the next placed piece will receive.
    #[inline]
    pub fn next_id(&self) -> PieceId {
        self.next_id
    }

    pub fn into_parts(self) -> (Board, Pieces, Entanglements) {
        (self.board, self.pieces, Entanglements::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_layout_has_32_pieces_in_order() {
        let (board, pieces, ents) = Setup::classical().into_parts();
        assert_eq!(pieces.len(), 32);
        assert_eq!(ents.record_count(), 0);
        assert_eq!(board.id_at(0), 1);
        assert_eq!(board.id_at(63), 32);
        for sq in 16..48 {
            assert_eq!(board.id_at(sq), EMPTY);
        }
        let white_king = pieces.get(board.id_at(60)).unwrap();
        assert_eq!(white_king.color, Color::White);
        assert_eq!(white_king.state_space, vec!["King".to_string()]);
        assert!(white_king.is_determined());
    }
}
