//! Interrupt the running cycle.

use crate::commands::open_store;
use crate::libs::cycle::CycleStatus;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut store = open_store()?;

    let Some(active) = store.active_cycle() else {
        msg_info!(Message::NoActiveCycle);
        return Ok(());
    };
    let task = active.task.clone();
    let status = active.status();

    // Interrupting also clears the active pointer. A finished cycle may
    // still hold the pointer; the reducer will not stamp it a second time,
    // so this only detaches it.
    store.interrupt_cycle();

    match status {
        CycleStatus::Running => msg_success!(Message::CycleInterrupted(task)),
        _ => msg_info!(Message::FinishedCyclePending(task)),
    }

    Ok(())
}
