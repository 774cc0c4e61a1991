use anyhow::Result;
use rocket::fs::{FileServer, Options};
use rocket::tokio::{
    self,
    time::{sleep, Duration},
};
use rocket::{routes, Build, Ignite, Rocket, Shutdown};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::config::AppConfig;

use super::FLAG_SHUTDOWN;

mod api;
mod pages;
mod statics;

pub fn run(conf: Arc<AppConfig>) {
    let rt = tokio::runtime::Runtime::new().expect("failed to create runtime");

    rt.block_on(async {
        rocket(conf)
            .await
            .expect("Failed to build rocket")
            .launch()
            .await
            .expect("failed to launch rocket");
    });

    // Make sure others shutdown as well
    FLAG_SHUTDOWN.store(true, std::sync::atomic::Ordering::Relaxed);
}

/// Assemble the Rocket instance: API, pages, embedded statics and the
/// file server exposing the output directory for download links.
fn build(conf: Arc<AppConfig>) -> Rocket<Build> {
    // Options::Missing: the output directory appears only after the
    // first successful download, that must not fail the launch.
    let downloads = FileServer::new(&conf.output_dir, Options::Missing);
    let public_route = conf.public_route.clone();

    rocket::build()
        .manage(conf)
        .mount("/static", routes![statics::style_css])
        .mount("/api", routes![api::post_download, api::get_downloads])
        .mount("/", routes![pages::get_home])
        .mount(public_route, downloads)
}

// Rocket configuration and setup function
pub async fn rocket(conf: Arc<AppConfig>) -> Result<Rocket<Ignite>> {
    // Launch Rocket and attach the shutdown monitor
    let rocket = build(conf).ignite().await?;

    // Get a handle to Rocket's shutdown mechanism
    let shutdown_handle = rocket.shutdown();

    // Spawn the monitoring task
    tokio::spawn(monitor_shutdown(shutdown_handle.clone()));

    Ok(rocket)
}

async fn monitor_shutdown(shutdown_handle: Shutdown) {
    loop {
        sleep(Duration::from_millis(1500)).await;
        if FLAG_SHUTDOWN.load(Ordering::Relaxed) {
            shutdown_handle.notify();
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn client_with(conf: AppConfig) -> Client {
        Client::tracked(build(Arc::new(conf))).expect("valid rocket instance")
    }

    fn test_config(output_dir: PathBuf, downloaders: Vec<String>) -> AppConfig {
        AppConfig {
            output_dir,
            downloaders,
            ..AppConfig::default()
        }
    }

    /// Write an executable shell script standing in for a downloader.
    fn fake_tool(dir: &Path, name: &str, script: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn post_rejects_missing_url() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let client = client_with(test_config(out.clone(), vec!["yt-dlp".into()]));

        let response = client
            .post("/api/download")
            .header(ContentType::JSON)
            .body(r#"{"url": ""}"#)
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_string().unwrap();
        assert!(body.contains("URL is required"));
        assert!(!out.exists());
    }

    #[test]
    fn post_rejects_non_youtube_url_without_running_tools() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let tool = fake_tool(tmp.path(), "tool", "#!/bin/sh\ntouch \"$(dirname \"$0\")/ran\"\n");
        let client = client_with(test_config(out.clone(), vec![tool]));

        let response = client
            .post("/api/download")
            .header(ContentType::JSON)
            .body(r#"{"url": "not a url"}"#)
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_string().unwrap();
        assert!(body.contains("Invalid YouTube URL"));
        assert!(!out.exists());
        assert!(!tmp.path().join("ran").exists());
    }

    #[test]
    fn get_lists_empty_before_first_download() {
        let tmp = tempfile::tempdir().unwrap();
        let client = client_with(test_config(tmp.path().join("out"), vec!["yt-dlp".into()]));

        let response = client.get("/api/download").dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["files"], serde_json::json!([]));
    }

    #[test]
    fn post_failure_of_all_tools_reports_details() {
        let tmp = tempfile::tempdir().unwrap();
        let primary = fake_tool(
            tmp.path(),
            "primary",
            "#!/bin/sh\necho 'no formats found' >&2\nexit 1\n",
        );
        let fallback = fake_tool(tmp.path(), "fallback", "#!/bin/sh\nexit 2\n");
        let client = client_with(test_config(tmp.path().join("out"), vec![primary, fallback]));

        let response = client
            .post("/api/download")
            .header(ContentType::JSON)
            .body(r#"{"url": "https://www.youtube.com/watch?v=abc123"}"#)
            .dispatch();

        assert_eq!(response.status(), Status::InternalServerError);
        let body = response.into_string().unwrap();
        assert!(body.contains("Make sure yt-dlp or youtube-dl is installed"));
        assert!(body.contains("no formats found"));
    }

    #[test]
    fn successful_download_is_listed_and_served() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        // Derives the target directory from the -o template argument
        let tool = fake_tool(
            tmp.path(),
            "tool",
            "#!/bin/sh\nprintf 'video-bytes' > \"$(dirname \"$4\")/Example Video - (abc123).mp4\"\nexit 0\n",
        );
        let client = client_with(test_config(out, vec![tool]));

        let response = client
            .post("/api/download")
            .header(ContentType::JSON)
            .body(r#"{"url": "https://www.youtube.com/watch?v=abc123"}"#)
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["message"], "Download completed successfully");
        assert_eq!(body["downloadDir"], "/downloads");

        let response = client.get("/api/download").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["files"], serde_json::json!(["Example Video - (abc123).mp4"]));

        // The file itself is reachable under the public route
        let response = client
            .get("/downloads/Example%20Video%20-%20(abc123).mp4")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_string().unwrap(), "video-bytes");
    }

    #[test]
    fn home_page_renders() {
        let tmp = tempfile::tempdir().unwrap();
        let client = client_with(test_config(tmp.path().join("out"), vec!["yt-dlp".into()]));

        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().unwrap();
        assert!(body.contains("Tubegrab"));
        assert!(body.contains("/api/download"));
    }
}
