//! Display implementation for pomo application messages.
//!
//! All user-facing text is defined here, in one place, as the rendering of
//! the structured [`Message`] enum. Message variants carry their dynamic
//! parts as typed fields, so formatting stays consistent and the text can be
//! adjusted without touching call sites.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === CYCLE MESSAGES ===
            Message::CycleStarted(task, minutes) => format!("Started '{}' for {} minutes", task, minutes),
            Message::CycleInterrupted(task) => format!("Interrupted '{}'", task),
            Message::CycleFinished(task) => format!("Finished '{}' 🎉", task),
            Message::NoActiveCycle => "No cycle is currently running".to_string(),
            Message::ActiveCycleStatus {
                task,
                minutes_amount,
                elapsed,
                remaining,
            } => format!("'{}' ({} min) — elapsed {}, remaining {}", task, minutes_amount, elapsed, remaining),
            Message::FinishedCyclePending(task) => format!("'{}' already finished; start a new cycle when ready", task),
            Message::CyclesHeader => "Cycle history".to_string(),
            Message::NoCyclesRecorded => "No cycles recorded yet".to_string(),

            // === VALIDATION MESSAGES ===
            Message::EmptyTaskName => "Task name must not be empty".to_string(),
            Message::MinutesOutOfRange { minutes, min, max } => {
                format!("Cycle duration {} is out of range, expected {}-{} minutes", minutes, min, max)
            }
            Message::ConfirmSupersedeActiveCycle(task) => {
                format!("'{}' is still running and will stay unfinished forever. Start a new cycle anyway?", task)
            }
            Message::StartAborted => "Kept the running cycle".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigModuleTimer => "Timer settings".to_string(),
            Message::PromptDefaultMinutes => "Default cycle duration in minutes".to_string(),
            Message::PromptMinMinutes => "Minimum cycle duration in minutes".to_string(),
            Message::PromptMaxMinutes => "Maximum cycle duration in minutes".to_string(),

            // === STATE FILE MESSAGES ===
            Message::StateReadFailed(e) => format!("Could not read cycle state, starting empty: {}", e),
            Message::StateParseFailed(e) => format!("Cycle state file is malformed, starting empty: {}", e),
            Message::StateSaveFailed(e) => format!("Failed to persist cycle state: {}", e),

            // === WATCH MESSAGES ===
            Message::WatchStarted(task, countdown) => format!("Watching '{}' — {} remaining", task, countdown),
            Message::WatchNothingToDo => "Nothing to watch: no cycle is running".to_string(),
        };
        write!(f, "{}", message)
    }
}
