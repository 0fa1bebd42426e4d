//! The move-application state machine.
//!
//! [`MoveEngine::apply_move`] takes a validated pair of board indices and mutates the board,
//! the piece registry and the entanglement arena in place. Per move it decides between:
//!
//! - **capture**: measure both pieces (and everything entangled with them), delete the captured
//!   piece once it is verified disentangled, relocate the mover;
//! - **measurement**: collapse every piece in the mover's area of influence;
//! - **gate**: transform determined pieces in the area of influence and entangle the mixed ones
//!   with the mover (see [`entangle`]);
//! - **plain relocation** for `None` actions and for movers that are already determined.

pub mod entangle;
pub mod measure;

use rand::Rng;
use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::core::square::CELLS;
use crate::error::EngineError;
use crate::model::{Board, Entanglements, PieceId, Pieces, EMPTY};
use crate::quantum::circuit::Action;

use self::entangle::{commit_transform, plan_influence, GroupChange};

/// What a successful move did, for logging and for the room dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mover was relocated with no quantum effect.
    Moved,
    /// `captured` was removed after measuring the pieces in `measured`.
    Captured {
        captured: PieceId,
        measured: Vec<PieceId>,
    },
    /// A measurement move collapsed the pieces in `measured`.
    Measured { measured: Vec<PieceId> },
    /// A gate move transformed determined pieces in place and (if `entangled` is non-empty)
    /// left those ids sharing one entanglement record.
    Influenced {
        transformed: Vec<PieceId>,
        entangled: Vec<PieceId>,
    },
    /// A gate move grew a group past the collapse threshold; the group was measured instead.
    Collapsed {
        transformed: Vec<PieceId>,
        measured: Vec<PieceId>,
    },
}

/// Applies moves against one room's state, owning that room's measurement RNG.
#[derive(Debug, Clone)]
pub struct MoveEngine<R> {
    config: EngineConfig,
    rng: R,
}

impl<R: Rng> MoveEngine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self { config, rng }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Apply the move `start -> end`, mutating the three state structures in place.
    #[instrument(level = "debug", skip(self, board, entanglements, pieces))]
    pub fn apply_move(
        &mut self,
        board: &mut Board,
        entanglements: &mut Entanglements,
        pieces: &mut Pieces,
        start: usize,
        end: usize,
    ) -> Result<MoveOutcome, EngineError> {
        if start >= CELLS {
            return Err(EngineError::InvalidPiece(start));
        }
        if end >= CELLS {
            return Err(EngineError::InvalidMove(end));
        }

        let mover = board.id_at(start);
        if mover == EMPTY {
            return Err(EngineError::InvalidPiece(start));
        }
        let mover_color = pieces.require(mover)?.color;

        let target = board.id_at(end);
        if target != EMPTY {
            if pieces.require(target)?.color == mover_color {
                return Err(EngineError::InvalidMove(end));
            }
            debug!(mover, captured = target, "capture");
            let measured =
                measure::measure_pair(pieces, entanglements, mover, target, &mut self.rng)?;
            process_capture(board, entanglements, pieces, end)?;
            relocate(board, pieces, start, end)?;
            return Ok(MoveOutcome::Captured {
                captured: target,
                measured,
            });
        }

        let piece = pieces.require(mover)?;
        let action = piece.action()?;
        if action == Action::None || piece.is_determined() {
            debug!(mover, %action, "plain relocation");
            relocate(board, pieces, start, end)?;
            return Ok(MoveOutcome::Moved);
        }

        let aof = piece.area_of_influence(board, pieces, end, self.config.influence)?;
        debug!(mover, %action, ?aof, "area of influence");

        if action == Action::Measurement {
            // The origin square is still occupied, so the mover can observe itself.
            let measured = measure::participants_on(board, entanglements, &aof);
            debug!(mover, ?measured, "measurement");
            measure::collapse(pieces, entanglements, &measured, &mut self.rng)?;
            relocate(board, pieces, start, end)?;
            return Ok(MoveOutcome::Measured { measured });
        }

        let plan = plan_influence(
            board,
            pieces,
            entanglements,
            mover,
            action,
            &aof,
            self.config.collapse_threshold,
        )?;
        let transformed: Vec<PieceId> = plan.transforms.iter().map(|(id, _)| *id).collect();
        for (id, state) in &plan.transforms {
            pieces.require_mut(*id)?.set_state(state)?;
        }

        let outcome = match plan.group {
            GroupChange::Unchanged => {
                debug!(mover, "no entanglement formed");
                MoveOutcome::Influenced {
                    transformed,
                    entangled: Vec::new(),
                }
            }
            GroupChange::Collapse { elements } => {
                debug!(mover, size = elements.len(), "unstable group collapses");
                measure::collapse(pieces, entanglements, &elements, &mut self.rng)?;
                MoveOutcome::Collapsed {
                    transformed,
                    measured: elements,
                }
            }
            GroupChange::Transform { record, marginals } => {
                let entangled = record.elements.clone();
                debug!(mover, ?entangled, "entangled");
                commit_transform(pieces, entanglements, record, &marginals)?;
                MoveOutcome::Influenced {
                    transformed,
                    entangled,
                }
            }
        };

        relocate(board, pieces, start, end)?;
        Ok(outcome)
    }

    /// Measure `id` and its entanglement partners with this engine's RNG.
    pub fn measure(
        &mut self,
        pieces: &mut Pieces,
        entanglements: &mut Entanglements,
        id: PieceId,
    ) -> Result<Vec<PieceId>, EngineError> {
        measure::measure(pieces, entanglements, id, &mut self.rng)
    }
}

/// [`MoveEngine::apply_move`] with the default configuration and the thread-local RNG.
pub fn apply_move(
    board: &mut Board,
    entanglements: &mut Entanglements,
    pieces: &mut Pieces,
    start: usize,
    end: usize,
) -> Result<MoveOutcome, EngineError> {
    MoveEngine::new(EngineConfig::default(), rand::thread_rng())
        .apply_move(board, entanglements, pieces, start, end)
}

/// Remove the piece on `end` after checking no entanglement still lists it.
pub fn process_capture(
    board: &mut Board,
    entanglements: &mut Entanglements,
    pieces: &mut Pieces,
    end: usize,
) -> Result<PieceId, EngineError> {
    let captured = board.id_at(end);
    if entanglements.lists(captured) {
        return Err(EngineError::InvalidEntanglementDelete(captured));
    }
    entanglements.unlink(captured);
    pieces.remove(captured);
    board.clear(end);
    Ok(captured)
}

fn relocate(
    board: &mut Board,
    pieces: &mut Pieces,
    start: usize,
    end: usize,
) -> Result<(), EngineError> {
    let id = board.id_at(start);
    pieces.require_mut(id)?.moved = true;
    board.clear(start);
    board.set(end, id);
    Ok(())
}
