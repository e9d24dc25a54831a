//! # Pomo - Pomodoro cycle tracker
//!
//! A command-line pomodoro timer: start a cycle with a task name and a
//! duration in minutes, watch the countdown, and keep the full history of
//! finished and interrupted cycles.
//!
//! ## Features
//!
//! - **Cycle State Machine**: Pure reducer over create/finish/interrupt transitions
//! - **Persistent History**: Versioned JSON state file in the platform data directory
//! - **Resumable Countdown**: Elapsed time survives restarts via the persisted start date
//! - **Cycle History**: Table view of all recorded cycles with their status
//! - **Configurable Bounds**: Default and min/max durations via interactive setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
