//! HTTP client for the attendance backend.

use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::lookup::{LookupBody, Resolution};
use anaa_types::{ScanEvent, StatusUpdate, SubjectId, SubjectStatus, TagId};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

/// Thin wrapper over the four backend endpoints the reader uses.
///
/// Every call is a single attempt bounded by the configured timeout.
/// Callers decide what a failure means; nothing is retried here.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    client: Client,
}

impl BackendClient {
    /// Creates a client. Fails if the base URL is not an http(s) URL.
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let base = config.base();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BackendError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| BackendError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Looks up which subject, if any, owns `tag`.
    ///
    /// 404 means the tag is unregistered. Any status other than 200 or 404
    /// is an error, as is a 200 body without a usable subject id.
    pub async fn lookup(&self, tag: &TagId) -> BackendResult<Resolution> {
        let url = format!(
            "{}/faculty/rfid/{}",
            self.config.base(),
            urlencoding::encode(tag.as_str())
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(Resolution::Unregistered),
            StatusCode::OK => {
                let bytes = response.bytes().await?;
                let subject = LookupBody::parse(&bytes).into_subject(tag)?;
                Ok(Resolution::Registered(subject))
            }
            other => Err(BackendError::Status(other.as_u16())),
        }
    }

    /// Records a scan of a tag no subject owns.
    pub async fn report_unregistered(&self, tag: &TagId) -> BackendResult<()> {
        self.post_scan(&ScanEvent::not_registered(tag.clone())).await
    }

    /// Sets a subject's presence status.
    pub async fn set_status(&self, id: &SubjectId, status: SubjectStatus) -> BackendResult<()> {
        let url = format!(
            "{}/faculty/{}/status",
            self.config.base(),
            urlencoding::encode(&id.to_string())
        );
        debug!("PATCH {} -> {}", url, status);

        let response = self
            .client
            .patch(&url)
            .json(&StatusUpdate::new(status))
            .send()
            .await?;
        ensure_success(response)
    }

    /// Logs an attendance scan for a registered subject.
    pub async fn record_scan(&self, id: &SubjectId, tag: &TagId) -> BackendResult<()> {
        self.post_scan(&ScanEvent::uhf_scan(id.clone(), tag.clone()))
            .await
    }

    async fn post_scan(&self, event: &ScanEvent) -> BackendResult<()> {
        let url = format!("{}/rfid/scan", self.config.base());
        debug!("POST {} ({:?})", url, event.kind);

        let response = self.client.post(&url).json(event).send().await?;
        ensure_success(response)
    }
}

fn ensure_success(response: Response) -> BackendResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(BackendError::Status(status.as_u16()))
    }
}
