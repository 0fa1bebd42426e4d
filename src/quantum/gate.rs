use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::QuantumError;
use crate::quantum::amplitude::{amp, multiply, Amplitude};

/// The fixed single-qubit gates a piece can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    SqrtNot,
}

impl GateKind {
    /// Per-factor scalar constant, factored out of the base matrix.
    #[inline]
    pub fn constant(self) -> Amplitude {
        use GateKind::*;
        match self {
            Hadamard => amp(FRAC_1_SQRT_2, 0.0),
            PauliX | PauliY | PauliZ => amp(1.0, 0.0),
            SqrtNot => amp(0.5, 0.0),
        }
    }

    /// Row-major 2×2 base matrix.
    #[inline]
    pub fn base(self) -> [Amplitude; 4] {
        use GateKind::*;
        match self {
            Hadamard => [amp(1.0, 0.0), amp(1.0, 0.0), amp(1.0, 0.0), amp(-1.0, 0.0)],
            PauliX => [amp(0.0, 0.0), amp(1.0, 0.0), amp(1.0, 0.0), amp(0.0, 0.0)],
            PauliY => [amp(0.0, 0.0), amp(0.0, -1.0), amp(0.0, 1.0), amp(0.0, 0.0)],
            PauliZ => [amp(1.0, 0.0), amp(0.0, 0.0), amp(0.0, 0.0), amp(-1.0, 0.0)],
            SqrtNot => [amp(1.0, 1.0), amp(1.0, -1.0), amp(1.0, -1.0), amp(1.0, 1.0)],
        }
    }
}

/// An n-qubit operator: `constant * matrix`, with the matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    constant: Amplitude,
    matrix: Vec<Amplitude>,
    size: usize,
}

impl Gate {
    /// Build `kind` for `qubits` qubits by tensoring its base with itself `qubits - 1` times.
    pub fn build(kind: GateKind, qubits: usize) -> Result<Self, QuantumError> {
        if qubits == 0 {
            return Err(QuantumError::InvalidQubitCount(qubits));
        }
        let base = kind.base();
        let base_constant = kind.constant();

        let mut constant = base_constant;
        let mut matrix = base.to_vec();
        for _ in 1..qubits {
            let (c, m) = tensor_product(&matrix, constant, &base, base_constant);
            constant = c;
            matrix = m;
        }
        Ok(Self {
            constant,
            matrix,
            size: 1usize << qubits,
        })
    }

    #[inline]
    pub fn constant(&self) -> Amplitude {
        self.constant
    }

    #[inline]
    pub fn matrix(&self) -> &[Amplitude] {
        &self.matrix
    }

    /// Side length of the (square) matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> Amplitude {
        self.matrix[row * self.size + col]
    }
}

/// Tensor product of two square row-major matrices with factored-out constants.
///
/// Iteration order is fixed (accumulated column, new column, accumulated row, new row) and
/// defines the basis layout joint entanglement vectors rely on.
pub fn tensor_product(
    a: &[Amplitude],
    c1: Amplitude,
    b: &[Amplitude],
    c2: Amplitude,
) -> (Amplitude, Vec<Amplitude>) {
    let hadamard = GateKind::Hadamard.constant();
    let constant = if c1 == hadamard && c2 == hadamard {
        // 1/√2 * 1/√2 would round; the pair is exactly one half.
        amp(0.5, 0.0)
    } else {
        multiply(c1, c2)
    };

    let rank_a = square_rank(a.len());
    let rank_b = square_rank(b.len());
    let mut out = Vec::with_capacity(a.len() * b.len());
    for col in 0..rank_a {
        for col_b in 0..rank_b {
            for row in 0..rank_a {
                let a_ij = a[col * rank_a + row];
                for row_b in 0..rank_b {
                    out.push(multiply(a_ij, b[col_b * rank_b + row_b]));
                }
            }
        }
    }
    (constant, out)
}

#[inline]
fn square_rank(len: usize) -> usize {
    let mut rank = 0usize;
    while (rank + 1) * (rank + 1) <= len {
        rank += 1;
    }
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_qubits_is_rejected() {
        assert_eq!(
            Gate::build(GateKind::PauliX, 0),
            Err(QuantumError::InvalidQubitCount(0))
        );
    }

    #[test]
    fn hadamard_pair_constant_is_exact_half() {
        let g = Gate::build(GateKind::Hadamard, 2).unwrap();
        assert_eq!(g.constant(), amp(0.5, 0.0));
        assert_eq!(g.size(), 4);
        assert_eq!(g.matrix().len(), 16);
    }

    #[test]
    fn two_qubit_pauli_x_swaps_both_bits() {
        let g = Gate::build(GateKind::PauliX, 2).unwrap();
        // X⊗X maps |00> <-> |11> and |01> <-> |10>: anti-diagonal ones.
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row + col == 3 { 1.0 } else { 0.0 };
                assert_eq!(g.entry(row, col), amp(expected, 0.0), "({row},{col})");
            }
        }
    }

    #[test]
    fn square_rank_of_perfect_squares() {
        assert_eq!(square_rank(4), 2);
        assert_eq!(square_rank(16), 4);
        assert_eq!(square_rank(256), 16);
    }
}
