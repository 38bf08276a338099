//! HTTP handlers: the fetch pipeline, the policy admin API, and metrics.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use labelgate_core::{BlockList, DenialPayload};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::intercept::{self, Enforced, LABELS_HEADER};

/// Fetch pipeline: forward to the backend, enforce policy, transmit the
/// verdict. Per request the stages are strictly ordered; nothing of the
/// backend body is written to the client before the decision is taken.
/// If the client goes away the handler future is dropped, which aborts
/// the outstanding upstream call without emitting a decision.
pub async fn fetch_resource(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    state.metrics().requests.inc(&[("route", "fetch")]);
    tracing::debug!(%path, "request received");

    let started = Instant::now();
    let result = state.upstream().fetch(&path).await;
    state.metrics().forward_duration.observe(&[], started.elapsed());

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            let code = e.client_code();
            state
                .metrics()
                .upstream_errors
                .inc(&[("kind", code.as_str())]);
            tracing::warn!(%path, error = %e, "upstream call failed");
            return ApiError(e).into_response();
        }
    };
    tracing::debug!(%path, status = %reply.status, "upstream reply received");

    let blocklist = state.policy().snapshot();
    let posture = state.cfg().policy.on_malformed_labels;
    let enforced = intercept::enforce(reply, &blocklist, posture);

    match enforced {
        Enforced::Denied => {
            state.metrics().policy_decisions.inc(&[("decision", "deny")]);
            tracing::info!(%path, "response blocked by label policy");
            (StatusCode::FORBIDDEN, Json(DenialPayload::new())).into_response()
        }
        Enforced::Allowed(reply) => {
            state.metrics().policy_decisions.inc(&[("decision", "allow")]);
            tracing::debug!(%path, "response allowed");

            let mut response = (reply.status, reply.body).into_response();

            if state.cfg().policy.expose_labels {
                if let Some(raw) = reply.labels_raw.as_deref() {
                    // Came off a real header, so re-encoding cannot fail.
                    if let Ok(v) = HeaderValue::from_bytes(raw) {
                        response.headers_mut().insert(LABELS_HEADER, v);
                    }
                }
            }

            response
        }
    }
}

/// Wire shape of the admin block-list resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct BlocklistBody {
    pub labels: Vec<String>,
}

/// `GET /v1/policy/blocklist` — current set, sorted for determinism.
pub async fn get_blocklist(State(state): State<AppState>) -> Json<BlocklistBody> {
    state.metrics().requests.inc(&[("route", "policy")]);
    Json(BlocklistBody {
        labels: state.policy().snapshot().to_sorted_vec(),
    })
}

/// `PUT /v1/policy/blocklist` — wholesale replace. Last writer wins;
/// requests already past their snapshot keep the pre-update policy.
pub async fn put_blocklist(
    State(state): State<AppState>,
    Json(body): Json<BlocklistBody>,
) -> Json<BlocklistBody> {
    state.metrics().requests.inc(&[("route", "policy")]);

    let next: BlockList = body.labels.into_iter().collect();
    let size = next.len();
    state.policy().replace(next);
    state.metrics().blocklist_replacements.inc(&[]);
    tracing::info!(size, "blocklist replaced");

    Json(BlocklistBody {
        labels: state.policy().snapshot().to_sorted_vec(),
    })
}

/// `GET /metrics` — Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
        .into_response()
}
