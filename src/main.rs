//! TUBEGRAB - web front end for yt-dlp
//! Supports only Linux operating systems.
//!
//! Server software with web-UI for downloading single videos by URL and
//! serving the resulting files.
//! Requires local installation of yt-dlp or youtube-dl.

use core::time;
use std::sync::{atomic::AtomicBool, Arc};
use std::thread;
use tracing::warn;

mod config;
mod downloader;
mod files;
mod webui;

// v-- GLOBALS
static FLAG_SHUTDOWN: AtomicBool = AtomicBool::new(false);
// ^-- GLOBALS

fn main() {
    // Initialize tracing (logging)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_level(true)
        .with_ansi(true)
        .compact()
        .init();

    // Resolve configuration once, shared by all subprograms
    let conf = Arc::new(config::AppConfig::from_env());

    // Set up CTRL+C handling, for clean shutdown
    ctrlc::set_handler(move || {
        warn!("Received Ctrl+C");
        FLAG_SHUTDOWN.store(true, std::sync::atomic::Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");

    // Start subprograms
    let mut subprogs = Vec::new();

    let conf_clone = conf.clone();
    subprogs.push(thread::spawn(move || webui::run(conf_clone)));

    // Main infinite loop
    loop {
        // Sleep so we don't trash the CPU
        thread::sleep(time::Duration::from_secs(1));

        // Check for shutdown signal
        if FLAG_SHUTDOWN.load(std::sync::atomic::Ordering::Relaxed) == true {
            break;
        }
    }

    // Clean shutdown
    warn!("Shutdown requested");
    FLAG_SHUTDOWN.store(true, std::sync::atomic::Ordering::Relaxed);
    for thd in subprogs {
        let _ = thd.join();
    }
    exit_with_ok();
}

/// Exit the program with no errors.
fn exit_with_ok() {
    std::process::exit(0);
}
