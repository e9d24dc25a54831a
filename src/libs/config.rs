//! Application configuration management.
//!
//! Settings live in a JSON file in the platform application data directory,
//! next to the persisted cycle state. Each section is optional, so the
//! config file stays minimal and new sections can be added without breaking
//! existing installs. An interactive wizard (`pomo init`) fills sections in.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Timer bounds and defaults applied by the `start` command.
///
/// The cycle store itself performs no range validation; these limits belong
/// to the command layer, which checks them before creating a cycle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Duration used when `start` is invoked without `--minutes`.
    pub default_minutes: u32,
    /// Smallest accepted cycle duration in minutes.
    pub min_minutes: u32,
    /// Largest accepted cycle duration in minutes.
    pub max_minutes: u32,
}

impl Default for TimerConfig {
    /// Classic pomodoro defaults: 25-minute cycles, bounded to 5..=60.
    fn default() -> Self {
        TimerConfig {
            default_minutes: 25,
            min_minutes: 5,
            max_minutes: 60,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Timer bounds and defaults; `None` means built-in defaults apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective timer settings, configured or default.
    pub fn timer(&self) -> TimerConfig {
        self.timer.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values pre-fill the prompts so re-running the wizard only
    /// changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.timer();

        msg_print!(Message::ConfigModuleTimer);
        config.timer = Some(TimerConfig {
            default_minutes: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDefaultMinutes.to_string())
                .default(default.default_minutes)
                .interact_text()?,
            min_minutes: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMinMinutes.to_string())
                .default(default.min_minutes)
                .interact_text()?,
            max_minutes: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMaxMinutes.to_string())
                .default(default.max_minutes)
                .interact_text()?,
        });

        Ok(config)
    }
}
