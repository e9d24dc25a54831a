//! Start a new pomodoro cycle.
//!
//! This command is the "form layer" in front of the cycle store: it owns all
//! input validation (non-empty task, duration within the configured bounds)
//! and the confirmation prompt when another cycle is still running. The
//! store itself accepts whatever it is given, so nothing may pass through
//! here unchecked.

use crate::commands::open_store;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Task to focus on during the cycle
    #[arg(required = true)]
    task: String,

    /// Cycle duration in minutes; configured default when omitted
    #[arg(long, short)]
    minutes: Option<u32>,

    /// Supersede a running cycle without asking
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let timer = Config::read()?.timer();
    let minutes = args.minutes.unwrap_or(timer.default_minutes);

    // Form-layer validation: the store does not re-check these.
    if args.task.trim().is_empty() {
        msg_bail_anyhow!(Message::EmptyTaskName);
    }
    if minutes < timer.min_minutes || minutes > timer.max_minutes {
        msg_bail_anyhow!(Message::MinutesOutOfRange {
            minutes,
            min: timer.min_minutes,
            max: timer.max_minutes,
        });
    }

    let mut store = open_store()?;

    // Superseding a running cycle leaves it unfinished in history forever,
    // so it deserves an explicit confirmation.
    if let Some(active) = store.active_cycle().filter(|cycle| cycle.finished_date.is_none()) {
        if !args.yes {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmSupersedeActiveCycle(active.task.clone()).to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_print!(Message::StartAborted);
                return Ok(());
            }
        }
    }

    let cycle = store.create_new_cycle(args.task.trim(), minutes);
    msg_success!(Message::CycleStarted(cycle.task, cycle.minutes_amount));

    Ok(())
}
