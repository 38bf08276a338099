//! labelgate gateway library entry.
//!
//! This crate wires the upstream forwarder, policy store, enforcement
//! intercept, and admin API into a cohesive gateway stack. It is intended to
//! be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod intercept;
pub mod obs;
pub mod policy;
pub mod router;
pub mod upstream;
