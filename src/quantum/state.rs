use crate::error::QuantumError;
use crate::quantum::amplitude::{multiply, Amplitude, ZERO};
use crate::quantum::gate::Gate;

/// Complex amplitudes of an n-qubit register (`2^n` entries).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuantumState {
    amplitudes: Vec<Amplitude>,
}

impl QuantumState {
    /// Zero-initialized state of `2^qubits` amplitudes.
    pub fn with_qubits(qubits: usize) -> Result<Self, QuantumError> {
        if qubits == 0 {
            return Err(QuantumError::InvalidQubitCount(qubits));
        }
        Ok(Self {
            amplitudes: vec![ZERO; 1usize << qubits],
        })
    }

    pub fn from_amplitudes(amplitudes: Vec<Amplitude>) -> Self {
        Self { amplitudes }
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn into_amplitudes(self) -> Vec<Amplitude> {
        self.amplitudes
    }

    /// Overwrite every amplitude; `values` must have exactly the current length.
    pub fn set(&mut self, values: &[Amplitude]) -> Result<(), QuantumError> {
        if values.len() != self.amplitudes.len() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.amplitudes.len(),
                found: values.len(),
            });
        }
        self.amplitudes.copy_from_slice(values);
        Ok(())
    }

    /// Left-multiply the state by `gate`, applying the gate constant once per term.
    pub fn apply(&mut self, gate: &Gate) -> Result<(), QuantumError> {
        let size = gate.size();
        if size != self.amplitudes.len() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.amplitudes.len(),
                found: size,
            });
        }

        let matrix = gate.matrix();
        let constant = gate.constant();
        let mut next = vec![ZERO; size];
        for (col, slot) in next.iter_mut().enumerate() {
            let mut acc = ZERO;
            for row in 0..size {
                let term = multiply(matrix[col * size + row], self.amplitudes[row]);
                acc += multiply(term, constant);
            }
            *slot = acc;
        }
        self.amplitudes = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::amplitude::{amp, ONE};
    use crate::quantum::gate::GateKind;

    #[test]
    fn new_state_is_zeroed() {
        let s = QuantumState::with_qubits(3).unwrap();
        assert_eq!(s.len(), 8);
        assert!(s.amplitudes().iter().all(|a| *a == ZERO));
    }

    #[test]
    fn set_rejects_wrong_length_and_keeps_values() {
        let mut s = QuantumState::with_qubits(1).unwrap();
        let err = s.set(&[ONE, ONE, ONE]).unwrap_err();
        assert_eq!(err, QuantumError::DimensionMismatch { expected: 2, found: 3 });
        assert_eq!(s.amplitudes(), &[ZERO, ZERO]);
    }

    #[test]
    fn apply_rejects_gate_of_other_size() {
        let mut s = QuantumState::from_amplitudes(vec![ONE, ZERO]);
        let g = Gate::build(GateKind::PauliZ, 2).unwrap();
        assert!(s.apply(&g).is_err());
        assert_eq!(s.amplitudes(), &[ONE, ZERO]);
    }

    #[test]
    fn pauli_y_on_zero_gives_i_one() {
        let mut s = QuantumState::from_amplitudes(vec![ONE, ZERO]);
        s.apply(&Gate::build(GateKind::PauliY, 1).unwrap()).unwrap();
        assert_eq!(s.amplitudes(), &[ZERO, amp(0.0, 1.0)]);
    }
}
