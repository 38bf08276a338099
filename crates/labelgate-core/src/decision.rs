//! Decision engine: evaluate a response's labels against the block-list.

use crate::label::{BlockList, LabelSet};

/// Binary access-control outcome. Denial is not graded; a single matching
/// label is sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    /// Lowercase name used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Deny => "deny",
        }
    }
}

/// DENY iff the intersection of `labels` and `blocklist` is non-empty.
///
/// Pure and side-effect free: consults only the given sets, never mutates
/// the block-list. Probes the smaller set against the larger one so the
/// test stays O(min(|labels|, |blocklist|)).
pub fn decide(labels: &LabelSet, blocklist: &BlockList) -> Decision {
    if labels.is_empty() || blocklist.is_empty() {
        return Decision::Allow;
    }

    let (probe, lookup) = if labels.len() <= blocklist.len() {
        (labels, blocklist)
    } else {
        (blocklist, labels)
    };

    if probe.iter().any(|l| lookup.contains(l)) {
        Decision::Deny
    } else {
        Decision::Allow
    }
}
