//! Shared application state for the labelgate gateway.
//!
//! Owns the config, the policy store, the upstream client, and the metrics
//! registry. The policy store is injected here rather than living in
//! ambient global state so handlers and tests get it explicitly.

use std::sync::Arc;

use labelgate_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;
use crate::policy::PolicyStore;
use crate::upstream::{HttpUpstream, Upstream};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    policy: PolicyStore,
    upstream: Arc<dyn Upstream>,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build application state with the production HTTP upstream.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let upstream = Arc::new(HttpUpstream::new(&cfg.upstream)?);
        Ok(Self::with_upstream(cfg, upstream))
    }

    /// Build state around an injected upstream (tests stub the backend).
    pub fn with_upstream(cfg: GatewayConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                policy: PolicyStore::new(),
                upstream,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn policy(&self) -> &PolicyStore {
        &self.inner.policy
    }

    pub fn upstream(&self) -> &dyn Upstream {
        self.inner.upstream.as_ref()
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
