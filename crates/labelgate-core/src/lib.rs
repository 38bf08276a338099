//! labelgate core: label model, decision engine, denial contract, and error types.
//!
//! This crate defines the access-control domain shared by the gateway and its
//! tests. It intentionally carries no transport or runtime dependencies so the
//! decision logic can be exercised without an HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LabelGateError`/`Result` so a gateway
//! process does not crash on malformed traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod denial;
pub mod error;
pub mod label;

pub use decision::{decide, Decision};
pub use denial::{DenialPayload, DENIAL_DETAIL, DENIAL_STATUS};
pub use error::{LabelGateError, Result};
pub use label::{BlockList, LabelSet};
