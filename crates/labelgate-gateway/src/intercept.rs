//! Enforcement intercept: the pipeline stage between the backend reply and
//! the client.
//!
//! Expressed as an explicit transform over `UpstreamReply` rather than a
//! framework middleware hook: the forwarder produces a reply value, this
//! stage inspects it against the current block-list snapshot, and only the
//! result is ever transmitted. Label extraction runs on the actual reply
//! emitted by the backend path, never a cached or default response.

use labelgate_core::error::{LabelGateError, Result};
use labelgate_core::{decide, BlockList, Decision, LabelSet};

use crate::config::MalformedLabelPosture;
use crate::upstream::UpstreamReply;

/// Metadata field carrying space-separated label tokens, on both the
/// backend response and (when exposure is enabled) the client response.
pub const LABELS_HEADER: &str = "labels";

/// Outcome of the intercept. `Denied` discards the original reply
/// entirely; the caller substitutes the fixed denial payload.
#[derive(Debug)]
pub enum Enforced {
    Allowed(UpstreamReply),
    Denied,
}

/// Read the label set off a reply's raw header bytes. A missing header is
/// the empty set; bytes that do not decode as UTF-8 are malformed.
pub fn extract_labels(labels_raw: Option<&[u8]>) -> Result<LabelSet> {
    match labels_raw {
        None => Ok(LabelSet::new()),
        Some(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => Ok(LabelSet::parse(s)),
            Err(e) => Err(LabelGateError::MalformedLabels(format!(
                "labels header is not valid utf-8: {e}"
            ))),
        },
    }
}

/// Run the decision over a backend reply. Consumes the reply so a denied
/// body cannot leak past this point.
pub fn enforce(
    reply: UpstreamReply,
    blocklist: &BlockList,
    posture: MalformedLabelPosture,
) -> Enforced {
    let labels = match extract_labels(reply.labels_raw.as_deref()) {
        Ok(labels) => labels,
        Err(e) => match posture {
            MalformedLabelPosture::Allow => {
                tracing::warn!(error = %e, "unreadable labels treated as unlabeled (fail-open)");
                LabelSet::new()
            }
            MalformedLabelPosture::Deny => {
                tracing::warn!(error = %e, "unreadable labels denied (fail-closed)");
                return Enforced::Denied;
            }
        },
    };

    match decide(&labels, blocklist) {
        Decision::Allow => Enforced::Allowed(reply),
        Decision::Deny => Enforced::Denied,
    }
}
