//! Forwarding gateway: the upstream HTTP call.
//!
//! `Upstream` is the seam between the enforcement pipeline and the backend;
//! tests substitute a stub, production wires `HttpUpstream` over reqwest.
//! Transport failures surface as distinguishable errors, never as an empty
//! label set: an unreachable backend must not be read as "no labels,
//! therefore allow".

use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use bytes::Bytes;

use labelgate_core::error::{LabelGateError, Result};

use crate::config::UpstreamSection;
use crate::intercept::LABELS_HEADER;

/// A backend response as seen by the enforcement intercept: relayed status,
/// fully buffered body, and the raw bytes of the `labels` header if the
/// backend sent one. The body is buffered before any decision so no bytes
/// can reach the client ahead of the verdict.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
    pub labels_raw: Option<Vec<u8>>,
}

/// Backend call seam.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Issue `GET <upstream>/<path>` and return the reply.
    async fn fetch(&self, path: &str) -> Result<UpstreamReply>;
}

/// Production upstream over a pooled reqwest client.
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(cfg: &UpstreamSection) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| LabelGateError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch(&self, path: &str) -> Result<UpstreamReply> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = resp.status();
        let labels_raw = resp
            .headers()
            .get(LABELS_HEADER)
            .map(|v| v.as_bytes().to_vec());

        // Body read shares the client deadline; a stall here is still a
        // transport failure, not an empty response.
        let body = resp.bytes().await.map_err(classify_transport_error)?;

        Ok(UpstreamReply {
            status,
            body,
            labels_raw,
        })
    }
}

fn classify_transport_error(e: reqwest::Error) -> LabelGateError {
    if e.is_timeout() {
        LabelGateError::UpstreamTimeout(e.to_string())
    } else {
        LabelGateError::UpstreamUnreachable(e.to_string())
    }
}
