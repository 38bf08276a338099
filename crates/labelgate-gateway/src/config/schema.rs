use serde::Deserialize;

use labelgate_core::error::{LabelGateError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub upstream: UpstreamSection,

    #[serde(default)]
    pub policy: PolicySection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LabelGateError::UnsupportedVersion);
        }

        self.upstream.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Base URL of the backend data service, e.g. `http://backend:8000`.
    pub base_url: String,

    /// Total deadline for a backend call, including body read.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// TCP connect deadline for a backend call.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(LabelGateError::BadRequest(
                "upstream.base_url must start with http:// or https://".into(),
            ));
        }
        if !(50..=120_000).contains(&self.timeout_ms) {
            return Err(LabelGateError::BadRequest(
                "upstream.timeout_ms must be between 50 and 120000".into(),
            ));
        }
        if !(50..=60_000).contains(&self.connect_timeout_ms) {
            return Err(LabelGateError::BadRequest(
                "upstream.connect_timeout_ms must be between 50 and 60000".into(),
            ));
        }
        if self.connect_timeout_ms > self.timeout_ms {
            return Err(LabelGateError::BadRequest(
                "upstream.connect_timeout_ms must not exceed timeout_ms".into(),
            ));
        }
        Ok(())
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}
fn default_connect_timeout_ms() -> u64 {
    3_000
}

/// What to do when label metadata is present but unreadable.
///
/// `allow` treats the response as unlabeled (the decision engine's default
/// for no labels); `deny` substitutes the denial payload. This is a
/// security-relevant choice, so it is config, not a hardcoded default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLabelPosture {
    Allow,
    Deny,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// Mirror the backend's `labels` value onto ALLOWed responses. The
    /// prototype behavior is `true`; production deployments that must not
    /// disclose label names to clients set `false`.
    #[serde(default = "default_expose_labels")]
    pub expose_labels: bool,

    #[serde(default = "default_malformed_posture")]
    pub on_malformed_labels: MalformedLabelPosture,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            expose_labels: default_expose_labels(),
            on_malformed_labels: default_malformed_posture(),
        }
    }
}

fn default_expose_labels() -> bool {
    true
}
fn default_malformed_posture() -> MalformedLabelPosture {
    MalformedLabelPosture::Allow
}
