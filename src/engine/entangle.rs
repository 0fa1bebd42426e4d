//! Entanglement formation for gate moves.
//!
//! A gate move is handled in two phases. [`plan_influence`] reads the board and works out every
//! change (single-piece transforms, the merged group, the gate output and the marginals) without
//! mutating anything, so every error surfaces before the state is touched. The engine then
//! commits the plan.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::EngineError;
use crate::model::{Board, Entanglement, Entanglements, Piece, PieceId, Pieces, EMPTY};
use crate::quantum::amplitude::{kronecker, Amplitude, ONE, ZERO};
use crate::quantum::circuit::{apply_circuit, Action};

/// What happens to the mover's entanglement group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupChange {
    /// Nobody joined the mover; no group forms.
    Unchanged,
    /// The group grew past the collapse threshold and is measured as a whole.
    Collapse { elements: Vec<PieceId> },
    /// The gate ran over the joint state; each element receives its marginal.
    Transform {
        record: Entanglement,
        marginals: Vec<[Amplitude; 2]>,
    },
}

/// Every change a gate move will make.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluencePlan {
    /// Determined pieces in the area of influence and their new state vectors.
    pub transforms: Vec<(PieceId, Vec<Amplitude>)>,
    pub group: GroupChange,
}

/// Work out the effect of `mover` exerting gate `action` on the pieces at `aof`.
///
/// The working group starts as the mover's own group (or the mover alone). Scanning the area
/// in ascending square order, determined pieces get the single-qubit gate in place, and mixed
/// pieces outside the group are merged in together with their whole group, their joint state
/// tensored onto the working state.
pub fn plan_influence(
    board: &Board,
    pieces: &Pieces,
    entanglements: &Entanglements,
    mover: PieceId,
    action: Action,
    aof: &BTreeSet<usize>,
    collapse_threshold: usize,
) -> Result<InfluencePlan, EngineError> {
    let mover_piece = pieces.require(mover)?;
    let (mut elements, mut factors) = match entanglements.group(mover) {
        Some(group) => (group.elements.clone(), vec![group.state.clone()]),
        None => (vec![mover], vec![qubit_vector(mover_piece)?]),
    };

    let mut transforms = Vec::new();
    for &square in aof {
        let id = board.id_at(square);
        if id == EMPTY || id == mover {
            continue;
        }
        let piece = pieces.require(id)?;
        if piece.is_determined() {
            if piece.state_space.len() != 1 {
                let out = apply_circuit(action, 1, &qubit_vector(piece)?)?;
                transforms.push((id, out));
            }
        } else if !elements.contains(&id) {
            match entanglements.group(id) {
                Some(group) => {
                    let joined: Vec<PieceId> = group
                        .elements
                        .iter()
                        .copied()
                        .filter(|e| !elements.contains(e))
                        .collect();
                    elements.extend(joined);
                    factors.push(group.state.clone());
                }
                None => {
                    elements.push(id);
                    factors.push(qubit_vector(piece)?);
                }
            }
        }
    }
    debug!(?elements, transformed = transforms.len(), "influence scanned");

    let group = if elements.len() <= 1 {
        GroupChange::Unchanged
    } else if elements.len() >= collapse_threshold {
        GroupChange::Collapse { elements }
    } else {
        for &id in &elements {
            qubit_vector(pieces.require(id)?)?;
        }
        let joint = factors
            .iter()
            .fold(vec![ONE], |acc, f| kronecker(&acc, f));
        let out = apply_circuit(action, elements.len(), &joint)?;
        let marginals = unpack_marginals(&out);
        GroupChange::Transform {
            record: Entanglement::new(elements, out),
            marginals,
        }
    };

    Ok(InfluencePlan { transforms, group })
}

/// A piece's state vector, which must hold exactly two identities to act as one qubit.
fn qubit_vector(piece: &Piece) -> Result<Vec<Amplitude>, EngineError> {
    if piece.state_space.len() != 2 {
        return Err(EngineError::InvalidSetState(piece.state_space.clone()));
    }
    Ok(piece.state_vector())
}

/// Split a joint vector of length `2^k` into `k` two-amplitude marginals.
///
/// At each step of size `s` (starting at the full length and halving down to 2) the *whole*
/// vector is walked in order, alternating between two accumulators every `s / 2` entries. This
/// is a fixed game rule rather than a partial trace.
pub fn unpack_marginals(joint: &[Amplitude]) -> Vec<[Amplitude; 2]> {
    let mut marginals = Vec::new();
    let mut size = joint.len();
    while size / 2 >= 1 {
        let half = size / 2;
        let mut acc = [ZERO, ZERO];
        let mut side = 0usize;
        let mut seen = 0usize;
        for &v in joint {
            acc[side] += v;
            seen += 1;
            if seen == half {
                side ^= 1;
                seen = 0;
            }
        }
        marginals.push(acc);
        size = half;
    }
    marginals
}

/// Give every element its marginal and link all of them to `record`.
pub(crate) fn commit_transform(
    pieces: &mut Pieces,
    entanglements: &mut Entanglements,
    record: Entanglement,
    marginals: &[[Amplitude; 2]],
) -> Result<(), EngineError> {
    for (&id, marginal) in record.elements.iter().zip(marginals) {
        pieces.require_mut(id)?.set_state(marginal)?;
    }
    entanglements.insert_linked(record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::amplitude::amp;

    #[test]
    fn unpack_two_qubits_by_halves_then_alternation() {
        let joint = [amp(1.0, 0.0), amp(2.0, 0.0), amp(3.0, 0.0), amp(4.0, 0.0)];
        let m = unpack_marginals(&joint);
        assert_eq!(m.len(), 2);
        // size 4: [1+2, 3+4]; size 2: [1+3, 2+4]
        assert_eq!(m[0], [amp(3.0, 0.0), amp(7.0, 0.0)]);
        assert_eq!(m[1], [amp(4.0, 0.0), amp(6.0, 0.0)]);
    }

    #[test]
    fn unpack_single_qubit_is_identity() {
        let joint = [amp(0.3, 0.1), amp(0.7, -0.2)];
        assert_eq!(unpack_marginals(&joint), vec![joint]);
    }
}
