//! Foreground countdown for the running cycle.
//!
//! This command is the ticking collaborator of the cycle store: once per
//! second it recomputes the elapsed wall-clock seconds from the cycle's
//! start date, pushes them into the store through `set_seconds_passed`, and
//! redraws the countdown. The store never times a cycle out by itself;
//! marking it finished when the elapsed count reaches the full duration
//! happens here.
//!
//! Elapsed time derives from `start_date` rather than from counting ticks,
//! so a watch attached long after `pomo start` (or resumed after a crash)
//! shows the true remaining time.

use crate::commands::open_store;
use crate::libs::cycle::CycleStatus;
use crate::libs::formatter::format_countdown;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Utc;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub fn cmd() -> Result<()> {
    let mut store = open_store()?;

    let Some(active) = store.active_cycle().filter(|cycle| cycle.status() == CycleStatus::Running) else {
        msg_info!(Message::WatchNothingToDo);
        return Ok(());
    };

    let task = active.task.clone();
    let start_date = active.start_date;
    let total_seconds = active.duration_seconds();

    msg_print!(Message::WatchStarted(
        task.clone(),
        format_countdown(total_seconds - store.amount_seconds_passed() as i64)
    ));

    loop {
        let elapsed = (Utc::now() - start_date).num_seconds().max(0);
        store.set_seconds_passed(elapsed as u64);

        if elapsed >= total_seconds {
            store.mark_current_cycle_as_finished();
            println!();
            msg_success!(Message::CycleFinished(task));
            return Ok(());
        }

        print!("\r⏳ {} ", format_countdown(total_seconds - elapsed));
        io::stdout().flush()?;

        thread::sleep(Duration::from_secs(1));
    }
}
