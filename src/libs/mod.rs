//! Core library modules for the pomo application.
//!
//! - **State machine**: cycle records, the pure reducer, the cycle store
//! - **Persistence**: versioned JSON state file, platform data directories
//! - **Infrastructure**: configuration, messaging, formatting, table views

pub mod config;
pub mod cycle;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod state;
pub mod state_file;
pub mod store;
pub mod view;
