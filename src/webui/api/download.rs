//! API endpoints for DOWNLOADS

use std::sync::Arc;

use rocket::{get, http::Status, post, serde::json::Json, tokio, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::downloader::{self, DownloadError};
use crate::files;

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    url: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    download_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilesReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[post("/download", format = "json", data = "<data>")]
pub async fn post_download(
    data: Json<DownloadRequest>,
    conf: &State<Arc<AppConfig>>,
) -> (Status, Json<DownloadReply>) {
    debug!("Download requested for: {}", data.url);

    // The downloader blocks for up to the configured timeout, keep it
    // off the async workers. The request still waits for completion.
    let worker_conf = conf.inner().clone();
    let url = data.url.clone();
    let result = tokio::task::spawn_blocking(move || downloader::fetch_video(&worker_conf, &url)).await;

    match result {
        Ok(Ok(())) => {
            info!("Download finished for: {}", data.url);
            (
                Status::Ok,
                Json(DownloadReply {
                    message: Some("Download completed successfully".into()),
                    download_dir: Some(conf.public_route.clone()),
                    ..DownloadReply::default()
                }),
            )
        }
        Ok(Err(err)) => {
            warn!("Download failed for {}: {}", data.url, err);
            let (status, reply) = reply_for(&err);
            (status, Json(reply))
        }
        Err(err) => {
            error!("Download worker died: {}", err);
            (
                Status::InternalServerError,
                Json(DownloadReply {
                    error: Some("Download failed".into()),
                    details: Some(err.to_string()),
                    ..DownloadReply::default()
                }),
            )
        }
    }
}

#[get("/download")]
pub async fn get_downloads(conf: &State<Arc<AppConfig>>) -> (Status, Json<FilesReply>) {
    match files::list_downloads(&conf.output_dir) {
        Ok(files) => (
            Status::Ok,
            Json(FilesReply {
                files: Some(files),
                error: None,
            }),
        ),
        Err(err) => {
            error!("Failed to list downloads: {}", err);
            (
                Status::InternalServerError,
                Json(FilesReply {
                    files: None,
                    error: Some("Failed to list files".into()),
                }),
            )
        }
    }
}

/// Map downloader errors onto the HTTP surface. Validation problems are
/// the caller's fault, everything else is a server-side failure.
fn reply_for(err: &DownloadError) -> (Status, DownloadReply) {
    let status = match err {
        DownloadError::MissingUrl | DownloadError::InvalidUrl => Status::BadRequest,
        DownloadError::AllToolsFailed { .. } | DownloadError::Io(_) => Status::InternalServerError,
    };

    let details = match err {
        DownloadError::AllToolsFailed { details } => Some(details.clone()),
        DownloadError::Io(io) => Some(io.to_string()),
        _ => None,
    };

    (
        status,
        DownloadReply {
            error: Some(err.to_string()),
            details,
            ..DownloadReply::default()
        },
    )
}
