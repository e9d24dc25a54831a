//! Show the running cycle with elapsed and remaining time.

use crate::commands::open_store;
use crate::libs::cycle::CycleStatus;
use crate::libs::formatter::format_countdown;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let store = open_store()?;

    let Some(active) = store.active_cycle() else {
        msg_info!(Message::NoActiveCycle);
        return Ok(());
    };

    if active.status() != CycleStatus::Running {
        msg_info!(Message::FinishedCyclePending(active.task.clone()));
        return Ok(());
    }

    // The snapshot constructor already resumed the elapsed counter from the
    // persisted start date.
    let elapsed = store.amount_seconds_passed() as i64;
    let remaining = active.duration_seconds() - elapsed;

    msg_print!(Message::ActiveCycleStatus {
        task: active.task.clone(),
        minutes_amount: active.minutes_amount,
        elapsed: format_countdown(elapsed),
        remaining: format_countdown(remaining),
    });

    Ok(())
}
