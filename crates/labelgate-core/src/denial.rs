//! Fixed-shape denial contract.
//!
//! The denial response is wire-visible and must stay bit-exact for
//! interoperability: HTTP 403 with JSON body
//! `{"detail":"Access denied due to classified label in response."}`.

use serde::{Deserialize, Serialize};

/// HTTP status returned on DENY.
pub const DENIAL_STATUS: u16 = 403;

/// Exact detail string of the denial body.
pub const DENIAL_DETAIL: &str = "Access denied due to classified label in response.";

/// The only body ever returned on DENY.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DenialPayload {
    pub detail: String,
}

impl DenialPayload {
    pub fn new() -> Self {
        Self {
            detail: DENIAL_DETAIL.to_owned(),
        }
    }
}

impl Default for DenialPayload {
    fn default() -> Self {
        Self::new()
    }
}
