//! Error types for the quantum rules engine.
//!
//! Every variant carries the value that triggered it (a square, a piece id, an action name or
//! the state space of the offending piece) so the room dispatcher can report it verbatim.

use crate::model::PieceId;

/// Failures of the linear-algebra layer (gates and state vectors).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantumError {
    /// A gate or state was requested for zero qubits.
    #[error("invalid qubit count {0}: at least one qubit is required")]
    InvalidQubitCount(usize),

    /// A gate or value vector does not match the length of the state it is applied to.
    #[error("dimension mismatch: expected {expected} amplitudes, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Failures of a single move (or of reconstructing the state a move runs against).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The destination square is illegal (off the board or held by the mover's own color).
    #[error("illegal move to position {0}")]
    InvalidMove(usize),

    /// A piece was expected on this square but the square is empty (or off the board).
    #[error("illegal piece on board at position {0}")]
    InvalidPiece(usize),

    /// The board references a piece id that the registry does not hold.
    #[error("illegal piece accessed in registry for id {0}")]
    InvalidPieceAccess(PieceId),

    /// The action string is not one of the recognized quantum actions.
    #[error("unrecognized action: {0:?}")]
    InvalidAction(String),

    /// A captured piece is still listed as an element of some entanglement.
    #[error("cannot delete id {0} from entanglements: still entangled")]
    InvalidEntanglementDelete(PieceId),

    /// Every identity amplitude of the piece is zero.
    #[error("states {0:?} are all zero")]
    InvalidMissingState(Vec<String>),

    /// A mixed state was required but the piece is determined.
    #[error("{0:?} state was passed in as a mixed state")]
    InvalidDeterminedState(Vec<String>),

    /// The number of amplitudes does not match the piece's state space.
    #[error("tried to set state of {0:?} but failed")]
    InvalidSetState(Vec<String>),

    /// A decoded entanglement record is inconsistent (bad joint length or unknown element).
    #[error("malformed entanglement record for id {0}")]
    MalformedEntanglement(PieceId),

    #[error(transparent)]
    Quantum(#[from] QuantumError),
}
