//! The cycle store: owned state machine plus its change-notification seam.
//!
//! [`CycleStore`] wraps [`CyclesState`] behind the three named transitions
//! and the derived reads the command layer consumes. It is an explicit,
//! ownable object handed to commands by parameter, never ambient state.
//!
//! ## Elapsed-seconds counter
//!
//! The store carries `amount_seconds_passed` alongside the persisted state.
//! On construction from a snapshot with an active cycle the counter resumes
//! from the cycle's `start_date`, so a new process picks up the countdown
//! where the previous one left it. While a cycle runs, an external ticking
//! collaborator (the `watch` command) overwrites the counter once per second
//! through [`CycleStore::set_seconds_passed`]; the store itself never
//! decides when a cycle is done.
//!
//! ## Persistence seam
//!
//! Storage is decoupled through [`StateListener`]: every mutation funnels
//! through the reducer and then notifies listeners with the full new state.
//! The persistence component subscribes; the machine knows nothing about
//! files or serialization.

use crate::libs::cycle::Cycle;
use crate::libs::state::{reduce, CycleCommand, CyclesState};
use chrono::Utc;

/// Observer notified with the full state after every mutation.
pub trait StateListener {
    fn state_changed(&mut self, state: &CyclesState);
}

/// In-memory cycle collection with persisted-on-write semantics.
pub struct CycleStore {
    state: CyclesState,
    amount_seconds_passed: u64,
    listeners: Vec<Box<dyn StateListener>>,
}

impl CycleStore {
    /// Constructs the store from an optional persisted snapshot.
    ///
    /// With a snapshot holding an active cycle, the elapsed-seconds counter
    /// initializes to the wall-clock seconds since that cycle's start date
    /// instead of zero.
    pub fn new(snapshot: Option<CyclesState>) -> Self {
        let state = snapshot.unwrap_or_default();
        let amount_seconds_passed = state
            .active_cycle()
            .map(|cycle| cycle.seconds_since_start(Utc::now()) as u64)
            .unwrap_or(0);

        CycleStore {
            state,
            amount_seconds_passed,
            listeners: Vec::new(),
        }
    }

    /// Subscribes a listener to state-change notifications.
    pub fn subscribe(&mut self, listener: Box<dyn StateListener>) {
        self.listeners.push(listener);
    }

    /// Creates a new cycle and makes it active.
    ///
    /// The store does not validate `task` or `minutes_amount`; range checks
    /// are the calling layer's contract. Creating while another cycle is
    /// running supersedes the active pointer and leaves the prior record in
    /// the sequence, permanently running.
    pub fn create_new_cycle(&mut self, task: &str, minutes_amount: u32) -> Cycle {
        let cycle = Cycle::new(task, minutes_amount);
        self.dispatch(CycleCommand::CreateCycle(cycle.clone()));
        self.amount_seconds_passed = 0;
        cycle
    }

    /// Stamps the active cycle as finished.
    ///
    /// The active pointer deliberately stays in place; the cycle's status
    /// turns terminal. No-op when nothing is active.
    pub fn mark_current_cycle_as_finished(&mut self) {
        self.dispatch(CycleCommand::MarkCurrentCycleAsFinished);
    }

    /// Stamps the active cycle as interrupted and clears the active pointer.
    /// No-op when nothing is active.
    pub fn interrupt_cycle(&mut self) {
        self.dispatch(CycleCommand::InterruptCurrentCycle);
    }

    /// Overwrites the elapsed-seconds counter.
    ///
    /// Called once per second by the ticking collaborator. The value is not
    /// checked against the cycle's duration; deciding to finish belongs to
    /// the caller.
    pub fn set_seconds_passed(&mut self, seconds: u64) {
        self.amount_seconds_passed = seconds;
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.state.cycles
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.state.active_cycle()
    }

    pub fn active_cycle_id(&self) -> Option<&str> {
        self.state.active_cycle_id.as_deref()
    }

    pub fn amount_seconds_passed(&self) -> u64 {
        self.amount_seconds_passed
    }

    pub fn state(&self) -> &CyclesState {
        &self.state
    }

    fn dispatch(&mut self, command: CycleCommand) {
        self.state = reduce(std::mem::take(&mut self.state), command);
        for listener in &mut self.listeners {
            listener.state_changed(&self.state);
        }
    }
}
