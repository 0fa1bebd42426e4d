use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::quantum::amplitude::Amplitude;
use crate::quantum::gate::{Gate, GateKind};
use crate::quantum::state::QuantumState;

/// The quantum action a piece exerts when it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    None,
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    SqrtNot,
    Measurement,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::None,
        Action::Hadamard,
        Action::PauliX,
        Action::PauliZ,
        Action::Measurement,
        Action::PauliY,
        Action::SqrtNot,
    ];

    /// Name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Action::None => "None",
            Action::Hadamard => "Hadamard",
            Action::PauliX => "PauliX",
            Action::PauliY => "PauliY",
            Action::PauliZ => "PauliZ",
            Action::SqrtNot => "SqrtNOT",
            Action::Measurement => "Measurement",
        }
    }

    /// The gate this action applies, if it is a gate action.
    pub fn gate_kind(self) -> Option<GateKind> {
        match self {
            Action::Hadamard => Some(GateKind::Hadamard),
            Action::PauliX => Some(GateKind::PauliX),
            Action::PauliY => Some(GateKind::PauliY),
            Action::PauliZ => Some(GateKind::PauliZ),
            Action::SqrtNot => Some(GateKind::SqrtNot),
            Action::None | Action::Measurement => None,
        }
    }
}

impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| EngineError::InvalidAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `action` as a `qubits`-qubit gate over `input` and return the resulting amplitudes.
///
/// Non-gate actions are rejected with [`EngineError::InvalidAction`]; there is no fallback gate.
pub fn apply_circuit(
    action: Action,
    qubits: usize,
    input: &[Amplitude],
) -> Result<Vec<Amplitude>, EngineError> {
    let kind = action
        .gate_kind()
        .ok_or_else(|| EngineError::InvalidAction(action.name().to_string()))?;
    let gate = Gate::build(kind, qubits)?;
    let mut state = QuantumState::with_qubits(qubits)?;
    state.set(input)?;
    state.apply(&gate)?;
    Ok(state.into_amplitudes())
}

/// [`apply_circuit`] keyed by the wire name of the action.
pub fn apply_named_circuit(
    action: &str,
    qubits: usize,
    input: &[Amplitude],
) -> Result<Vec<Amplitude>, EngineError> {
    apply_circuit(action.parse()?, qubits, input)
}
