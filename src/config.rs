//! Runtime configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Settings shared by the web-UI and the downloader.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory where downloaded media accumulate.
    pub output_dir: PathBuf,
    /// Route under which `output_dir` is served to browsers.
    pub public_route: String,
    /// Downloader binaries, in preference order. The first one that
    /// succeeds wins; later entries are never run after a success.
    pub downloaders: Vec<String>,
    /// Wall-clock bound for a single downloader attempt.
    pub download_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_dir: PathBuf::from("downloads"),
            public_route: String::from("/downloads"),
            downloaders: vec![String::from("yt-dlp"), String::from("youtube-dl")],
            download_timeout: Duration::from_secs(300),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut conf = AppConfig::default();

        if let Ok(dir) = env::var("TUBEGRAB_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                conf.output_dir = PathBuf::from(dir.trim());
            }
        }

        if let Ok(tools) = env::var("TUBEGRAB_DOWNLOADERS") {
            let tools: Vec<String> = tools
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if !tools.is_empty() {
                conf.downloaders = tools;
            }
        }

        if let Ok(secs) = env::var("TUBEGRAB_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => conf.download_timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid TUBEGRAB_TIMEOUT_SECS: {}", secs),
            }
        }

        conf
    }
}
