//! Rules engine for a quantum chess variant.
//!
//! Pieces hold superpositions over classical identities ("Rook-or-Pawn"), exert quantum
//! actions on the pieces around their destination, become entangled with them, and collapse
//! when measured through a capture or a measurement move.
//!
//! - [`quantum`]: amplitudes, gates, state vectors and the action → gate dispatcher.
//! - [`core`] / [`chess`]: board geometry, identities, areas of influence, starting setups.
//! - [`model`]: the board, piece registry and shared entanglement records.
//! - [`engine`]: the move-application state machine.
//! - [`game`] / [`snapshot`]: per-room ownership and the decoded wire forms.

pub mod chess;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod model;
pub mod quantum;
pub mod snapshot;
