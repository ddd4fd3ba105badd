//! Statevector simulation engine.
//!
//! Amplitudes are indexed by basis-state integer value: bit `q` of the
//! index is the value of qubit `q`, so qubit `n-1` is the most-significant
//! bit — the same convention the oracle builders and `Counts` keys use.

use num_complex::Complex64;
use rand::Rng;

use qrange_hal::{HalError, HalResult};
use qrange_ir::{Circuit, Instruction, InstructionKind, StandardGate};

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// All amplitudes, indexed by basis-state value.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state.
    pub fn amplitude(&self, basis_state: usize) -> Complex64 {
        self.amplitudes[basis_state]
    }

    /// Measurement probability of one basis state.
    pub fn probability(&self, basis_state: usize) -> f64 {
        self.amplitudes[basis_state].norm_sqr()
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.0 as usize).collect();
                self.apply_gate(&gate.kind, &qubits);
            }
            // Neither modifies amplitudes; sampling happens after evolution.
            InstructionKind::Measure | InstructionKind::Barrier => {}
        }
    }

    fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::P(theta) => self.apply_phase(qubits[0], *theta),
            StandardGate::MCX(_) => {
                let (target, controls) = qubits.split_last().expect("mcx has a target");
                self.apply_mcx(controls, *target);
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    /// Multi-controlled X: flip the target wherever every control bit is 1.
    ///
    /// An empty control list degenerates to a plain X.
    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let ctrl_mask: usize = controls.iter().map(|c| 1usize << c).sum();
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Sample one measurement outcome according to the Born rule.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }

    /// Format a measurement outcome as a most-significant-qubit-first
    /// bit-string.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
    }
}

/// Evolve a circuit from |0...0⟩ and return the final statevector.
///
/// Measurements and barriers are ignored during evolution; sampling from
/// the returned state is the caller's concern. Oracle contract tests use
/// this to inspect amplitude signs directly.
pub fn evolve(circuit: &Circuit) -> HalResult<Statevector> {
    if circuit.num_qubits() == 0 {
        return Err(HalError::InvalidCircuit(
            "circuit declares zero qubits".to_string(),
        ));
    }
    let mut sv = Statevector::new(circuit.num_qubits());
    for inst in circuit.instructions() {
        sv.apply(inst);
    }
    Ok(sv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrange_ir::QubitId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitude(0), Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitude(1), Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitude(2), Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitude(3), Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitude(0), Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitude(1), Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_and_z() {
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        assert!(approx_eq(sv.amplitude(1), Complex64::new(1.0, 0.0)));
        sv.apply_z(0);
        assert!(approx_eq(sv.amplitude(1), Complex64::new(-1.0, 0.0)));
    }

    #[test]
    fn test_mcx_flips_only_when_all_controls_set() {
        // |110⟩: controls q1, q2 set, target q0 clear.
        let mut sv = Statevector::new(3);
        sv.apply_x(1);
        sv.apply_x(2);
        sv.apply_mcx(&[1, 2], 0);
        assert!(approx_eq(sv.amplitude(0b111), Complex64::new(1.0, 0.0)));

        // One control clear: nothing happens.
        let mut sv = Statevector::new(3);
        sv.apply_x(2);
        sv.apply_mcx(&[1, 2], 0);
        assert!(approx_eq(sv.amplitude(0b100), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_mcx_empty_controls_is_x() {
        let mut sv = Statevector::new(1);
        sv.apply_mcx(&[], 0);
        assert!(approx_eq(sv.amplitude(1), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_h_mcx_h_is_phase_flip_on_all_ones() {
        // H on target, CX, H on target marks |11⟩ with -1.
        let mut circuit = Circuit::with_size("mcz", 2, 0);
        circuit.h_all().unwrap();
        circuit.h(QubitId(1)).unwrap();
        circuit.mcx([QubitId(0)], QubitId(1)).unwrap();
        circuit.h(QubitId(1)).unwrap();

        let sv = evolve(&circuit).unwrap();
        assert!(sv.amplitude(0b11).re < 0.0);
        for state in 0..3 {
            assert!(sv.amplitude(state).re > 0.0);
        }
    }

    #[test]
    fn test_sample_deterministic_state() {
        let mut sv = Statevector::new(1);
        sv.apply_x(0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_outcome_to_bitstring_msb_first() {
        let sv = Statevector::new(4);
        assert_eq!(sv.outcome_to_bitstring(0b0110), "0110");
        assert_eq!(sv.outcome_to_bitstring(1), "0001");
    }
}
