//! Top-level facade crate for labelgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use labelgate_core::*;
}

pub mod gateway {
    pub use labelgate_gateway::*;
}
