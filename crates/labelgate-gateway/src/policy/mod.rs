//! Policy layer: the process-wide block-list store.
//!
//! The decision engine itself lives in `labelgate-core`; this module owns
//! the single piece of shared mutable state the core permits, the
//! atomically-replaceable BlockList.

pub mod store;

pub use store::PolicyStore;
