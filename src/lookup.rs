//! Problem-count lookup used for optional page tab labels.
//!
//! How counts are produced is outside the catalog; renderers only see the
//! [`ProblemCountLookup`] trait. Unknown categories count as zero.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Category key -> number of practice problems.
pub trait ProblemCountLookup {
    /// Count for `category`, or 0 when the category is unknown.
    fn count(&self, category: &str) -> u32;
}

impl<F> ProblemCountLookup for F
where
    F: Fn(&str) -> u32,
{
    fn count(&self, category: &str) -> u32 {
        self(category)
    }
}

/// Table-backed lookup, deserializable from a JSON object of counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemCounts {
    counts: FxHashMap<String, u32>,
}

impl ProblemCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, count: u32) -> Option<u32> {
        self.counts.insert(category.into(), count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl ProblemCountLookup for ProblemCounts {
    fn count(&self, category: &str) -> u32 {
        self.counts.get(category).copied().unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for ProblemCounts {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
