//! Classical chess knowledge the quantum engine needs: piece identities and their movement
//! patterns, areas of influence, and starting positions.

pub mod influence;
pub mod piece;
pub mod setup;
