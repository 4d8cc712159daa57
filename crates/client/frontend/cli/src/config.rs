//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

/// Terminal client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `{name}.save` files.
    pub save_dir: PathBuf,
    /// Directory holding `story.ron` and `maps/`.
    pub content_dir: PathBuf,
    /// Directory for the log file.
    pub log_dir: PathBuf,
    /// Fixed seed for reproducible runs; entropy when unset.
    pub seed: Option<u64>,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Save file directory (default: platform data dir + `/saves`)
    /// - `CONTENT_DIR` - Story and map directory (default: bundled content)
    /// - `LOG_DIR` - Log file directory (default: platform cache dir + `/logs`)
    /// - `GAME_SEED` - RNG seed (default: unset, entropy)
    /// - `CLI_TEXT_DELAY_MS` - Per-character narration delay (default: 20)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SAVE_DATA_DIR") {
            config.save_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("CONTENT_DIR") {
            config.content_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("LOG_DIR") {
            config.log_dir = dir;
        }
        config.seed = read_env::<u64>("GAME_SEED");
        if let Some(delay) = read_env::<u64>("CLI_TEXT_DELAY_MS") {
            config.ui.text_delay = Duration::from_millis(delay);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        let dirs = ProjectDirs::from("", "", "isekai");
        let save_dir = dirs
            .as_ref()
            .map(|dirs| dirs.data_dir().join("saves"))
            .unwrap_or_else(|| PathBuf::from("saves"));
        let log_dir = dirs
            .as_ref()
            .map(|dirs| dirs.cache_dir().join("logs"))
            .unwrap_or_else(|| env::temp_dir().join("isekai").join("logs"));

        Self {
            save_dir,
            content_dir: game_content::ContentFactory::bundled_data_dir(),
            log_dir,
            seed: None,
            ui: UiConfig::default(),
        }
    }
}

/// Display timing and layout limits.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Delay between revealed characters of a narration line.
    pub text_delay: Duration,
    /// Smallest terminal the story screens are laid out for.
    pub min_columns: u16,
    pub min_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            text_delay: Duration::from_millis(20),
            min_columns: 85,
            min_rows: 25,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_content_and_entropy() {
        let config = CliConfig::default();
        assert_eq!(config.content_dir, game_content::ContentFactory::bundled_data_dir());
        assert!(config.save_dir.ends_with("saves"));
        assert!(config.seed.is_none());
        assert_eq!(config.ui.text_delay, Duration::from_millis(20));
        assert_eq!((config.ui.min_columns, config.ui.min_rows), (85, 25));
    }
}
