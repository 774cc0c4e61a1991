//! Fetch videos by shelling out to a local yt-dlp (or youtube-dl) binary.
//!
//! Candidate binaries are tried in the order given by configuration. Each
//! attempt gets one wall-clock timeout; a timed-out process is killed and
//! reaped. The first success wins, later candidates are never spawned.
//!
//! Downloader invocation:
//! yt-dlp -f best -o "<OUTPUT_DIR>/%(title)s - (%(id)s).%(ext)s" <URL>

use regex::Regex;
use std::fs::create_dir_all;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::sync::OnceLock;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;

/// Output path template. Includes the video id so that two videos sharing
/// a title do not collide; re-downloading the same video overwrites.
const FILENAME_TEMPLATE: &str = "%(title)s - (%(id)s).%(ext)s";

static YOUTUBE_URL: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("URL is required")]
    MissingUrl,
    #[error("Invalid YouTube URL")]
    InvalidUrl,
    #[error("Failed to download. Make sure yt-dlp or youtube-dl is installed.")]
    AllToolsFailed { details: String },
    #[error("Download failed")]
    Io(#[from] std::io::Error),
}

/// Coarse check for YouTube-family hosts, with or without scheme/`www`.
pub fn is_youtube_url(url: &str) -> bool {
    let re = YOUTUBE_URL.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?(youtube|youtu|youtube-nocookie)\.(com|be)/")
            .expect("Invalid YouTube URL pattern")
    });
    re.is_match(url)
}

/// Validate the URL and run the configured downloaders until one succeeds.
///
/// Rejected URLs produce no side effect at all: the output directory is
/// only created, and processes only spawned, after validation passes.
pub fn fetch_video(conf: &AppConfig, url: &str) -> Result<(), DownloadError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(DownloadError::MissingUrl);
    }
    if !is_youtube_url(url) {
        return Err(DownloadError::InvalidUrl);
    }

    create_dir_all(&conf.output_dir)?;

    let filepath = conf.output_dir.join(FILENAME_TEMPLATE);
    let mut failures = Vec::with_capacity(conf.downloaders.len());

    for tool in &conf.downloaders {
        debug!("Trying downloader '{}' for {}", tool, url);
        match run_downloader(tool, &filepath, url, conf.download_timeout) {
            Ok(()) => {
                info!("Downloaded {} with '{}'", url, tool);
                return Ok(());
            }
            Err(reason) => {
                warn!("Downloader '{}' failed: {}", tool, reason);
                failures.push(format!("{}: {}", tool, reason));
            }
        }
    }

    Err(DownloadError::AllToolsFailed {
        details: failures.join("; "),
    })
}

/// Run a single downloader attempt. Any failure comes back as the
/// diagnostic text reported to the caller.
fn run_downloader(tool: &str, filepath: &Path, url: &str, timeout: Duration) -> Result<(), String> {
    let child = Command::new(tool)
        .args(["-f", "best", "-o"])
        .arg(filepath)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => return Err(format!("could not start: {}", e)),
    };

    let output = wait_with_output_timeout(child, timeout)?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        Err(format!("exited with {}", output.status))
    } else {
        Err(format!("exited with {}: {}", output.status, stderr))
    }
}

/// Wait for a child process with a timeout. Kills the child on timeout.
fn wait_with_output_timeout(mut child: Child, timeout: Duration) -> Result<Output, String> {
    let deadline = Instant::now() + timeout;

    // Poll with try_wait until the process exits or we time out
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => {
                // Process exited, collect output
                return child
                    .wait_with_output()
                    .map_err(|e| format!("could not collect output: {}", e));
            }
            Ok(None) => {
                // Still running
                if Instant::now() >= deadline {
                    error!("Downloader timed out after {}s, killing", timeout.as_secs());
                    let _ = child.kill();
                    let _ = child.wait(); // Reap the zombie
                    return Err(format!("timed out after {}s", timeout.as_secs()));
                }
                thread::sleep(Duration::from_millis(500));
            }
            Err(e) => return Err(format!("could not poll: {}", e)),
        }
    }
}
