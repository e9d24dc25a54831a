//! List recorded cycles in a table.
//!
//! History is append-only: every cycle ever created shows up, including
//! superseded ones that stayed permanently running.

use crate::commands::open_store;
use crate::libs::cycle::{CycleGroup, CycleStatus};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Show only cycles started today
    #[arg(long, short)]
    today: bool,

    /// Show only cycles in a given state (running, finished, interrupted)
    #[arg(long, short)]
    status: Option<String>,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let store = open_store()?;

    let today = Local::now().date_naive();
    let cycles: Vec<_> = store
        .cycles()
        .iter()
        .filter(|cycle| !args.today || cycle.start_date.with_timezone(&Local).date_naive() == today)
        .filter(|cycle| match args.status.as_deref() {
            Some(status) => matches_status(cycle.status(), status),
            None => true,
        })
        .cloned()
        .collect();

    if cycles.is_empty() {
        msg_info!(Message::NoCyclesRecorded);
        return Ok(());
    }

    msg_print!(Message::CyclesHeader, true);
    View::cycles(&cycles.format());

    Ok(())
}

fn matches_status(status: CycleStatus, wanted: &str) -> bool {
    status.to_string().eq_ignore_ascii_case(wanted)
}
