pub mod history;
pub mod init;
pub mod start;
pub mod status;
pub mod stop;
pub mod watch;

use crate::libs::state_file::StateFile;
use crate::libs::store::CycleStore;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start a new cycle", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Interrupt the running cycle")]
    Stop,
    #[command(about = "Show the running cycle")]
    Status,
    #[command(about = "List recorded cycles")]
    History(history::HistoryArgs),
    #[command(about = "Run the countdown for the running cycle")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args),
            Commands::Stop => stop::cmd(),
            Commands::Status => status::cmd(),
            Commands::History(args) => history::cmd(args),
            Commands::Watch => watch::cmd(),
        }
    }
}

/// Builds the cycle store from the persisted snapshot and wires the state
/// file in as the persistence listener.
///
/// Every command goes through here, so all mutations are saved on write.
pub(crate) fn open_store() -> Result<CycleStore> {
    let state_file = StateFile::new()?;
    let snapshot = state_file.load();
    let mut store = CycleStore::new(snapshot);
    store.subscribe(Box::new(state_file));
    Ok(store)
}
