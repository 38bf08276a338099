//! Label model: opaque classification tokens attached to a response.
//!
//! A label is a case-sensitive string token with no internal structure
//! (e.g. `"public"`, `"classified"`). A `LabelSet` is the unordered set of
//! labels carried by a single response; duplicates collapse and order is
//! irrelevant. `BlockList` is the same shape used for the deny policy.

use std::collections::HashSet;

/// Unordered set of classification labels. Empty is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    inner: HashSet<String>,
}

/// The set of labels that must never reach the client. Same representation
/// as `LabelSet`; the alias keeps call sites honest about which side of the
/// decision a set is on.
pub type BlockList = LabelSet;

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space-separated token list (the wire form of the `labels`
    /// metadata field). Tokens are split on ASCII whitespace; repeated
    /// tokens collapse. An empty or all-whitespace value yields the empty
    /// set, which is always ALLOW.
    pub fn parse(raw: &str) -> Self {
        Self {
            inner: raw.split_ascii_whitespace().map(str::to_owned).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.inner.contains(label)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    /// Labels as a sorted list, for deterministic admin responses.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut v: Vec<String> = self.inner.iter().cloned().collect();
        v.sort();
        v
    }
}

impl FromIterator<String> for LabelSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(str::to_owned).collect(),
        }
    }
}
