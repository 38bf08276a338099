//! Atomically-replaceable block-list store.
//!
//! Readers take an `Arc` snapshot; a concurrent replace can never tear a
//! set a reader already holds. No persistence: a restart resets the store
//! to empty.

use std::sync::{Arc, RwLock};

use labelgate_core::BlockList;

/// Process-wide block-list. Construct once at startup, then share via the
/// app state. Last writer wins on concurrent replaces; an in-flight
/// decision may legitimately observe the pre-replace set.
pub struct PolicyStore {
    current: RwLock<Arc<BlockList>>,
}

impl PolicyStore {
    /// Empty store; nothing is blocked until the admin API says so.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(BlockList::new())),
        }
    }

    /// Snapshot of the active set. The lock is held only for the Arc
    /// clone, so reads never block each other meaningfully.
    pub fn snapshot(&self) -> Arc<BlockList> {
        // A poisoned lock cannot tear an Arc swap; recover the guard
        // instead of panicking the request path.
        match self.current.read() {
            Ok(g) => Arc::clone(&g),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Wholesale swap of the active set. No incremental add/remove.
    pub fn replace(&self, next: BlockList) {
        let next = Arc::new(next);
        match self.current.write() {
            Ok(mut g) => *g = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelgate_core::LabelSet;

    fn set(labels: &[&str]) -> BlockList {
        labels.iter().copied().collect()
    }

    #[test]
    fn starts_empty() {
        let store = PolicyStore::new();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn replace_then_snapshot_round_trips() {
        let store = PolicyStore::new();
        store.replace(set(&["secret", "classified"]));
        assert_eq!(
            store.snapshot().to_sorted_vec(),
            vec!["classified", "secret"]
        );
    }

    #[test]
    fn replace_is_idempotent() {
        let store = PolicyStore::new();
        store.replace(set(&["classified"]));
        let once = store.snapshot().to_sorted_vec();
        store.replace(set(&["classified"]));
        assert_eq!(store.snapshot().to_sorted_vec(), once);
    }

    #[test]
    fn replace_is_wholesale_not_incremental() {
        let store = PolicyStore::new();
        store.replace(set(&["a", "b"]));
        store.replace(set(&["c"]));
        let current = store.snapshot();
        assert!(!current.contains("a"));
        assert!(!current.contains("b"));
        assert!(current.contains("c"));
    }

    #[test]
    fn snapshot_survives_concurrent_replace() {
        let store = std::sync::Arc::new(PolicyStore::new());
        store.replace(set(&["old1", "old2"]));

        let held: std::sync::Arc<LabelSet> = store.snapshot();

        let writer = {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    store.replace(set(&["new1", "new2"]));
                }
            })
        };
        writer.join().unwrap();

        // The held snapshot is the complete pre-replace set, never a mix.
        assert_eq!(held.to_sorted_vec(), vec!["old1", "old2"]);
        assert_eq!(store.snapshot().to_sorted_vec(), vec!["new1", "new2"]);
    }
}
