//! Session owning the current two-qubit state
//!
//! A [`Session`] holds exactly one current [`StateVector`] together with a
//! bounded undo history. Every operation takes `&mut self`, so transitions are
//! serialized by the borrow checker; hosts that share a session across
//! threads wrap it in a mutex.
//!
//! # Example
//!
//! ```
//! use qbloch::{GateInput, MeasureRequest, Session, SessionConfig, StateInput};
//! use qbloch_gates::StandardGate;
//! use qbloch_state::Qubit;
//!
//! let mut session = Session::with_config(SessionConfig::new().with_seed(7));
//! session.apply_gate(&GateInput::named(StandardGate::HadamardQ1)).unwrap();
//! let snapshot = session.apply_gate(&GateInput::named(StandardGate::Cnot10)).unwrap();
//! assert!(!snapshot.is_separable);
//!
//! // Both qubits now agree
//! let first = session.measure(MeasureRequest::new(Qubit::Q1)).unwrap();
//! let second = session.measure(MeasureRequest::new(Qubit::Q0)).unwrap();
//! assert_eq!(first.outcome, second.outcome);
//! ```

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::payload::{self, GateInput, MeasureRequest, MeasureResponse, StateInput};
use crate::snapshot::StateSnapshot;
use qbloch_state::{MeasurementOutcome, Qubit, StateVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Interactive session over a single two-qubit state
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    current: StateVector,
    history: VecDeque<StateVector>,
    rng: StdRng,
}

impl Session {
    /// Session at |00⟩ with the default configuration
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            current: StateVector::default(),
            history: VecDeque::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current state
    pub fn state(&self) -> &StateVector {
        &self.current
    }

    /// Number of states that [`undo`](Self::undo) can step back through
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from_state(&self.current, self.config.separability_tolerance)
    }

    /// Replace the current state with a normalized input state
    pub fn apply_state(&mut self, input: &StateInput) -> Result<StateSnapshot> {
        let next = input.to_state().map_err(|err| {
            warn!(error = %err, "rejected input state");
            SessionError::from(err)
        })?;
        Ok(self.commit(next, "apply_state"))
    }

    /// Apply a gate to the current state
    ///
    /// The gate is validated before the state is touched; a non-unitary
    /// matrix leaves the session unchanged.
    pub fn apply_gate(&mut self, input: &GateInput) -> Result<StateSnapshot> {
        let next = input
            .to_gate(self.config.unitary_tolerance)
            .and_then(|gate| Ok(gate.apply(&self.current)?))
            .map_err(|err| {
                warn!(error = %err, "rejected gate");
                err
            })?;
        Ok(self.commit(next, "apply_gate"))
    }

    /// Measure one qubit, drawing the outcome from the session RNG
    pub fn measure(&mut self, request: MeasureRequest) -> Result<MeasureResponse> {
        let qubit = self.requested_qubit(request)?;
        let rng = &mut self.rng;
        let outcome = qbloch_state::measure(&self.current, qubit, &mut || rng.gen::<f64>());
        self.finish_measurement(qubit, outcome)
    }

    /// Measure one qubit with an externally supplied sampler in [0, 1)
    pub fn measure_with(
        &mut self,
        request: MeasureRequest,
        rng: &mut dyn FnMut() -> f64,
    ) -> Result<MeasureResponse> {
        let qubit = self.requested_qubit(request)?;
        let outcome = qbloch_state::measure(&self.current, qubit, rng);
        self.finish_measurement(qubit, outcome)
    }

    /// Restore the state that preceded the last transition
    pub fn undo(&mut self) -> Result<StateSnapshot> {
        let Some(previous) = self.history.pop_back() else {
            warn!("undo with empty history");
            return Err(SessionError::NothingToUndo);
        };
        self.current = previous;
        let snapshot = self.snapshot();
        debug!(
            action = "undo",
            separable = snapshot.is_separable,
            history = self.history.len(),
            "state restored"
        );
        Ok(snapshot)
    }

    /// Return to |00⟩ and clear the history
    pub fn reset(&mut self) -> StateSnapshot {
        self.current = StateVector::default();
        self.history.clear();
        debug!(action = "reset", "state reset");
        self.snapshot()
    }

    /// Decode a state payload from JSON, apply it and encode the snapshot
    pub fn apply_state_json(&mut self, json: &str) -> Result<String> {
        let input: StateInput = payload::from_json(json)?;
        payload::to_json(&self.apply_state(&input)?)
    }

    /// Decode a gate payload from JSON, apply it and encode the snapshot
    pub fn apply_gate_json(&mut self, json: &str) -> Result<String> {
        let input: GateInput = payload::from_json(json)?;
        payload::to_json(&self.apply_gate(&input)?)
    }

    /// Decode a measurement request from JSON and encode the response
    pub fn measure_json(&mut self, json: &str) -> Result<String> {
        let request: MeasureRequest = payload::from_json(json)?;
        payload::to_json(&self.measure(request)?)
    }

    fn requested_qubit(&self, request: MeasureRequest) -> Result<Qubit> {
        request.qubit().map_err(|err| {
            warn!(error = %err, "rejected measurement request");
            SessionError::from(err)
        })
    }

    fn finish_measurement(
        &mut self,
        qubit: Qubit,
        outcome: qbloch_state::Result<MeasurementOutcome>,
    ) -> Result<MeasureResponse> {
        let outcome = outcome.map_err(|err| {
            warn!(error = %err, %qubit, "measurement collapse failed");
            SessionError::from(err)
        })?;
        debug!(
            %qubit,
            bit = outcome.bit,
            prob_0 = outcome.probability_zero,
            "measured"
        );

        let snapshot = self.commit(outcome.state, "measure");
        Ok(MeasureResponse {
            qubit_index: qubit.index(),
            outcome: outcome.bit,
            prob_0: outcome.probability_zero,
            prob_1: outcome.probability_one,
            snapshot,
        })
    }

    fn commit(&mut self, next: StateVector, action: &'static str) -> StateSnapshot {
        if self.config.history_limit > 0 {
            if self.history.len() == self.config.history_limit {
                self.history.pop_front();
            }
            self.history.push_back(self.current);
        }
        self.current = next;

        let snapshot = self.snapshot();
        debug!(
            action,
            separable = snapshot.is_separable,
            concurrence = snapshot.concurrence,
            history = self.history.len(),
            "state updated"
        );
        snapshot
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
