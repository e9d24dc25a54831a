#[cfg(test)]
mod tests {
    use pomo::libs::config::{Config, TimerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.timer.is_none());
    }

    #[test]
    fn test_default_timer_config() {
        let timer = TimerConfig::default();
        assert_eq!(timer.default_minutes, 25);
        assert_eq!(timer.min_minutes, 5);
        assert_eq!(timer.max_minutes, 60);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.timer.is_none());
        // The effective timer settings fall back to built-in defaults.
        assert_eq!(config.timer(), TimerConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            timer: Some(TimerConfig {
                default_minutes: 50,
                min_minutes: 10,
                max_minutes: 90,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let timer = read_config.timer.unwrap();

        assert_eq!(timer.default_minutes, 50);
        assert_eq!(timer.min_minutes, 10);
        assert_eq!(timer.max_minutes, 90);
    }
}
