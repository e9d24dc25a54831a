//! Cycle collection state and its pure transition function.
//!
//! The aggregate persisted unit is [`CyclesState`]: the append-only sequence
//! of cycles plus the pointer to the one currently running. Every mutation
//! is expressed as a [`CycleCommand`] and applied by [`reduce`], a pure
//! function from state and command to the next state. Keeping the machine
//! pure makes the transitions testable without any command-line surface.
//!
//! ## Transition table
//!
//! Per cycle: `running` → `finished` | `interrupted`; both are terminal.
//!
//! - `CreateCycle` appends the new cycle and points `active_cycle_id` at it.
//!   Creating while another cycle is still running silently supersedes the
//!   pointer; the prior record stays in the sequence, permanently running.
//! - `MarkCurrentCycleAsFinished` stamps `finished_date` on the active
//!   cycle. The active pointer is NOT cleared; consumers distinguish a
//!   finished active cycle through its status. This keeps persisted
//!   snapshots byte-compatible with history written by earlier versions.
//! - `InterruptCurrentCycle` stamps `interrupted_date` on the active cycle
//!   and clears the pointer.
//!
//! Finish and interrupt with no active cycle are silent no-ops, not errors.

use crate::libs::cycle::Cycle;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The aggregate persisted state: all cycles plus the active pointer.
///
/// Invariant: when `active_cycle_id` is set, exactly one cycle in `cycles`
/// carries that id. Insertion order of `cycles` is creation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CyclesState {
    pub cycles: Vec<Cycle>,
    pub active_cycle_id: Option<String>,
}

impl Default for CyclesState {
    fn default() -> Self {
        CyclesState {
            cycles: Vec::new(),
            active_cycle_id: None,
        }
    }
}

impl CyclesState {
    /// The cycle referenced by `active_cycle_id`, if any.
    pub fn active_cycle(&self) -> Option<&Cycle> {
        let id = self.active_cycle_id.as_deref()?;
        self.cycles.iter().find(|cycle| cycle.id == id)
    }
}

/// Commands accepted by the cycle state machine.
#[derive(Debug, Clone)]
pub enum CycleCommand {
    CreateCycle(Cycle),
    MarkCurrentCycleAsFinished,
    InterruptCurrentCycle,
}

/// The cycle with the given id, only while it has no terminal date yet.
///
/// Terminal transitions stamp a date exactly once; a cycle that already
/// finished or was interrupted is never stamped again, even when the active
/// pointer still references it.
fn running_cycle<'a>(state: &'a mut CyclesState, id: &str) -> Option<&'a mut Cycle> {
    state
        .cycles
        .iter_mut()
        .find(|cycle| cycle.id == id && cycle.finished_date.is_none() && cycle.interrupted_date.is_none())
}

/// Applies a command to the state, returning the next state.
pub fn reduce(mut state: CyclesState, command: CycleCommand) -> CyclesState {
    match command {
        CycleCommand::CreateCycle(cycle) => {
            state.active_cycle_id = Some(cycle.id.clone());
            state.cycles.push(cycle);
            state
        }
        CycleCommand::MarkCurrentCycleAsFinished => {
            let Some(id) = state.active_cycle_id.clone() else {
                return state;
            };
            if let Some(cycle) = running_cycle(&mut state, &id) {
                cycle.finished_date = Some(Utc::now());
            }
            state
        }
        CycleCommand::InterruptCurrentCycle => {
            let Some(id) = state.active_cycle_id.take() else {
                return state;
            };
            if let Some(cycle) = running_cycle(&mut state, &id) {
                cycle.interrupted_date = Some(Utc::now());
            }
            state
        }
    }
}
