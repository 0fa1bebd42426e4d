//! Measurement: probabilistic collapse of pieces and of everything entangled with them.

use rand::Rng;
use tracing::trace;

use crate::error::EngineError;
use crate::model::{Board, Entanglements, Piece, PieceId, Pieces, EMPTY};
use crate::quantum::amplitude::modulus;

/// Measure `id` together with every member of its entanglement group.
///
/// Returns the measured ids (the group elements, or `id` alone if it is not entangled).
pub fn measure<R: Rng + ?Sized>(
    pieces: &mut Pieces,
    entanglements: &mut Entanglements,
    id: PieceId,
    rng: &mut R,
) -> Result<Vec<PieceId>, EngineError> {
    let participants = match entanglements.group(id) {
        Some(group) => group.elements.clone(),
        None => vec![id],
    };
    collapse(pieces, entanglements, &participants, rng)?;
    Ok(participants)
}

/// Measure the two pieces of a capture.
///
/// Pieces sharing a group are measured once through that group; otherwise each piece (and its
/// own group) is measured independently.
pub fn measure_pair<R: Rng + ?Sized>(
    pieces: &mut Pieces,
    entanglements: &mut Entanglements,
    first: PieceId,
    second: PieceId,
    rng: &mut R,
) -> Result<Vec<PieceId>, EngineError> {
    if entanglements.shares_group(first, second) {
        return measure(pieces, entanglements, second, rng);
    }
    let mut measured = measure(pieces, entanglements, first, rng)?;
    measured.extend(measure(pieces, entanglements, second, rng)?);
    Ok(measured)
}

/// Every piece on `squares` together with its group partners, each listed once, in scan order.
pub fn participants_on<'a>(
    board: &Board,
    entanglements: &Entanglements,
    squares: impl IntoIterator<Item = &'a usize>,
) -> Vec<PieceId> {
    let mut participants = Vec::new();
    for &square in squares {
        let id = board.id_at(square);
        if id == EMPTY {
            continue;
        }
        let group = match entanglements.group(id) {
            Some(group) => group.elements.clone(),
            None => vec![id],
        };
        for member in group {
            if !participants.contains(&member) {
                participants.push(member);
            }
        }
    }
    participants
}

/// Collapse each of `participants` to one identity and clear their entanglement links.
///
/// Every participant is looked up before any of them is touched. A participant whose
/// amplitudes are all zero still collapses, onto its first identity.
pub fn collapse<R: Rng + ?Sized>(
    pieces: &mut Pieces,
    entanglements: &mut Entanglements,
    participants: &[PieceId],
    rng: &mut R,
) -> Result<(), EngineError> {
    for &id in participants {
        pieces.require(id)?;
    }

    for &id in participants {
        let piece = pieces.require_mut(id)?;
        if piece.state_space.len() > 1 {
            let draw: f64 = rng.gen();
            if let Some(identity) = select_identity(piece, draw) {
                trace!(id, %identity, draw, "collapsed");
                piece.collapse_to(&identity);
            }
        }
        entanglements.unlink(id);
    }
    Ok(())
}

/// Walk identities in state-space order, accumulating amplitude moduli, and pick the first one
/// whose running sum exceeds `draw`. When the sum stays short of the draw (rounding, or no
/// weight at all) the first identity with the largest modulus wins.
///
/// `None` only for an empty state space.
pub fn select_identity(piece: &Piece, draw: f64) -> Option<String> {
    let mut running = 0.0;
    let mut best: Option<(&str, f64)> = None;
    for name in &piece.state_space {
        let weight = modulus(piece.amplitude(name));
        if best.map_or(true, |(_, w)| weight > w) {
            best = Some((name.as_str(), weight));
        }
        running += weight;
        if draw < running {
            return Some(name.clone());
        }
    }
    best.map(|(name, _)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::Color;
    use crate::quantum::amplitude::{amp, ONE, ZERO};
    use crate::quantum::circuit::Action;

    fn xy(x: f64, y: f64) -> Piece {
        let identities = [("X", amp(x, 0.0)), ("Y", amp(y, 0.0))];
        Piece::superposed(Color::Black, Action::Measurement, &identities)
    }

    #[test]
    fn selection_follows_running_mass() {
        let p = xy(0.25, 0.75);
        assert_eq!(select_identity(&p, 0.0).as_deref(), Some("X"));
        assert_eq!(select_identity(&p, 0.2499).as_deref(), Some("X"));
        assert_eq!(select_identity(&p, 0.25).as_deref(), Some("Y"));
        assert_eq!(select_identity(&p, 0.99).as_deref(), Some("Y"));
    }

    #[test]
    fn short_mass_falls_back_to_largest_modulus() {
        // Unnormalized weights that sum to 0.5: draws above that fall back.
        let p = xy(0.1, 0.4);
        assert_eq!(select_identity(&p, 0.9).as_deref(), Some("Y"));
    }

    #[test]
    fn zero_weights_fall_back_to_first_identity() {
        let p = xy(0.0, 0.0);
        for draw in [0.0, 0.5, 0.999] {
            assert_eq!(select_identity(&p, draw).as_deref(), Some("X"));
        }
        // Ties keep the earlier identity.
        assert_eq!(select_identity(&xy(0.2, 0.2), 0.9).as_deref(), Some("X"));
    }

    #[test]
    fn collapsed_piece_selects_its_identity() {
        let mut p = xy(1.0, 0.0);
        p.state.insert("X".into(), ZERO);
        p.state.insert("Y".into(), ONE);
        for draw in [0.0, 0.5, 0.999] {
            assert_eq!(select_identity(&p, draw).as_deref(), Some("Y"));
        }
    }
}
