use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::chess::influence::{reach, InfluenceRules};
use crate::chess::piece::{Color, PieceKind};
use crate::core::square::Square;
use crate::error::EngineError;
use crate::model::{Board, PieceId};
use crate::quantum::amplitude::{is_nonzero, Amplitude, ONE, ZERO};
use crate::quantum::circuit::Action;

/// A quantum piece: a superposition over classical identities plus the action it exerts.
///
/// `state_space`, `state` and `initial_state` always describe the same identities; use
/// [`Piece::validate`] after building one from decoded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    /// Wire name of the action; parsed on use so unknown names surface at move time.
    pub action: String,
    pub color: Color,
    pub initial_state: BTreeMap<String, Amplitude>,
    pub state_space: Vec<String>,
    pub state: BTreeMap<String, Amplitude>,
    pub moved: bool,
}

impl Piece {
    /// A piece over `identities` (in state-space order) with matching initial and current state.
    pub fn superposed(color: Color, action: Action, identities: &[(&str, Amplitude)]) -> Self {
        let state: BTreeMap<String, Amplitude> = identities
            .iter()
            .map(|(name, a)| (name.to_string(), *a))
            .collect();
        Self {
            action: action.name().to_string(),
            color,
            initial_state: state.clone(),
            state_space: identities.iter().map(|(name, _)| name.to_string()).collect(),
            state,
            moved: false,
        }
    }

    /// A single-identity (always determined) piece.
    pub fn classical(color: Color, kind: PieceKind) -> Self {
        Self::superposed(color, Action::None, &[(kind.name(), ONE)])
    }

    /// Replace the action name (unknown names are kept verbatim).
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_moved(mut self, moved: bool) -> Self {
        self.moved = moved;
        self
    }

    pub fn action(&self) -> Result<Action, EngineError> {
        self.action.parse()
    }

    #[inline]
    pub fn amplitude(&self, identity: &str) -> Amplitude {
        self.state.get(identity).copied().unwrap_or(ZERO)
    }

    /// Identities with a non-zero amplitude, in state-space order.
    pub fn activated_states(&self) -> Result<Vec<&str>, EngineError> {
        let active: Vec<&str> = self
            .state_space
            .iter()
            .map(String::as_str)
            .filter(|name| is_nonzero(self.amplitude(name)))
            .collect();
        if active.is_empty() {
            return Err(EngineError::InvalidMissingState(self.state_space.clone()));
        }
        Ok(active)
    }

    /// More than one identity is still possible.
    pub fn is_mixed(&self) -> bool {
        self.state_space
            .iter()
            .filter(|name| is_nonzero(self.amplitude(name)))
            .count()
            > 1
    }

    #[inline]
    pub fn is_determined(&self) -> bool {
        !self.is_mixed()
    }

    /// Amplitudes in state-space order.
    pub fn state_vector(&self) -> Vec<Amplitude> {
        self.state_space
            .iter()
            .map(|name| self.amplitude(name))
            .collect()
    }

    /// Assign amplitudes in state-space order.
    pub fn set_state(&mut self, values: &[Amplitude]) -> Result<(), EngineError> {
        if values.len() != self.state_space.len() {
            return Err(EngineError::InvalidSetState(self.state_space.clone()));
        }
        for (name, value) in self.state_space.iter().zip(values) {
            self.state.insert(name.clone(), *value);
        }
        Ok(())
    }

    /// Put all weight on `identity` and zero every other identity.
    pub fn collapse_to(&mut self, identity: &str) {
        for name in &self.state_space {
            let value = if name == identity { ONE } else { ZERO };
            self.state.insert(name.clone(), value);
        }
    }

    /// Check that the state space and both state maps describe the same identities.
    pub fn validate(&self) -> Result<(), EngineError> {
        let n = self.state_space.len();
        let consistent = n > 0
            && self.state.len() == n
            && self.initial_state.len() == n
            && self
                .state_space
                .iter()
                .all(|name| self.state.contains_key(name) && self.initial_state.contains_key(name));
        if !consistent {
            return Err(EngineError::InvalidSetState(self.state_space.clone()));
        }
        Ok(())
    }

    /// Occupied squares this piece would influence from `target`, across all active identities.
    ///
    /// Requires a mixed piece: a determined piece exerts no quantum action.
    pub fn area_of_influence(
        &self,
        board: &Board,
        pieces: &Pieces,
        target: usize,
        rules: InfluenceRules,
    ) -> Result<BTreeSet<usize>, EngineError> {
        let active = self.activated_states()?;
        if active.len() < 2 {
            return Err(EngineError::InvalidDeterminedState(self.state_space.clone()));
        }
        let from = Square::new(target).ok_or(EngineError::InvalidMove(target))?;

        let mut aof = BTreeSet::new();
        for name in active {
            let Some(kind) = PieceKind::from_name(name) else {
                continue;
            };
            let hits = reach(kind, from, self.color, board);
            if kind == PieceKind::Queen && rules.queen_same_color_only {
                aof.extend(hits.into_iter().filter(|&sq| {
                    pieces
                        .get(board.id_at(sq))
                        .is_some_and(|p| p.color == self.color)
                }));
            } else {
                aof.extend(hits);
            }
        }
        Ok(aof)
    }
}

/// Registry of live pieces by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pieces {
    list: FxHashMap<PieceId, Piece>,
}

impl Pieces {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.list.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.list.get_mut(&id)
    }

    /// Like [`Pieces::get`], but a missing id is [`EngineError::InvalidPieceAccess`].
    pub fn require(&self, id: PieceId) -> Result<&Piece, EngineError> {
        self.list.get(&id).ok_or(EngineError::InvalidPieceAccess(id))
    }

    pub fn require_mut(&mut self, id: PieceId) -> Result<&mut Piece, EngineError> {
        self.list
            .get_mut(&id)
            .ok_or(EngineError::InvalidPieceAccess(id))
    }

    pub fn insert(&mut self, id: PieceId, piece: Piece) -> Option<Piece> {
        self.list.insert(id, piece)
    }

    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.list.remove(&id)
    }

    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        self.list.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.list.iter().map(|(&id, p)| (id, p))
    }
}

impl FromIterator<(PieceId, Piece)> for Pieces {
    fn from_iter<I: IntoIterator<Item = (PieceId, Piece)>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::amplitude::amp;

    fn rook_or_pawn(rook: Amplitude, pawn: Amplitude) -> Piece {
        Piece::superposed(Color::White, Action::Hadamard, &[("Rook", rook), ("Pawn", pawn)])
    }

    #[test]
    fn mixed_needs_two_nonzero_identities() {
        assert!(rook_or_pawn(amp(0.7, 0.0), amp(0.7, 0.0)).is_mixed());
        assert!(rook_or_pawn(ONE, ZERO).is_determined());
        // (0,1) is a perfectly good non-zero amplitude.
        assert!(rook_or_pawn(amp(0.0, 1.0), ONE).is_mixed());
    }

    #[test]
    fn all_zero_piece_has_missing_state() {
        let p = rook_or_pawn(ZERO, ZERO);
        assert_eq!(
            p.activated_states(),
            Err(EngineError::InvalidMissingState(vec!["Rook".into(), "Pawn".into()]))
        );
    }

    #[test]
    fn set_state_follows_state_space_order() {
        let mut p = rook_or_pawn(ONE, ZERO);
        p.set_state(&[amp(0.1, 0.0), amp(0.2, 0.3)]).unwrap();
        assert_eq!(p.amplitude("Rook"), amp(0.1, 0.0));
        assert_eq!(p.amplitude("Pawn"), amp(0.2, 0.3));
        assert_eq!(p.state_vector(), vec![amp(0.1, 0.0), amp(0.2, 0.3)]);
        assert!(p.set_state(&[ONE]).is_err());
    }

    #[test]
    fn validate_rejects_mismatched_maps() {
        let mut p = rook_or_pawn(ONE, ZERO);
        assert!(p.validate().is_ok());
        p.initial_state.remove("Pawn");
        assert!(p.validate().is_err());
    }

    #[test]
    fn determined_piece_has_no_area_of_influence() {
        let p = rook_or_pawn(ONE, ZERO);
        let err = p
            .area_of_influence(&Board::empty(), &Pieces::new(), 20, InfluenceRules::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidDeterminedState(_)));
    }
}
