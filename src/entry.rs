//! Knowledge entries and entry-group modules.
//!
//! An [`Entry`] is the smallest unit of catalog content. Built-in content is
//! authored as `static` slices via the `const` constructor, so the strings
//! are borrowed for the whole process; entries loaded from JSON own theirs.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Complexity tag used for entries that describe an idea rather than an algorithm.
pub const CONCEPT: &str = "Concept";

/// One curated technique record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Display key, e.g. `"mergeSort(arr)"`. Not unique across the corpus.
    pub signature: Cow<'static, str>,
    pub description: Cow<'static, str>,
    /// Usually a complexity class like `"O(n log n)"`, sometimes [`CONCEPT`].
    pub complexity: Cow<'static, str>,
    /// Grouping label; entries sharing it are displayed together.
    pub section: Cow<'static, str>,
    pub example: Cow<'static, str>,
}

impl Entry {
    pub const fn new(
        signature: &'static str,
        description: &'static str,
        complexity: &'static str,
        section: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            signature: Cow::Borrowed(signature),
            description: Cow::Borrowed(description),
            complexity: Cow::Borrowed(complexity),
            section: Cow::Borrowed(section),
            example: Cow::Borrowed(example),
        }
    }

    pub fn is_concept(&self) -> bool {
        self.complexity == CONCEPT
    }
}

/// An ordered, never-mutated array of entries authored together.
pub type EntryGroup<'a> = &'a [Entry];

#[cfg(test)]
mod tests {
    use super::*;

    static GROUP: &[Entry] = &[
        Entry::new("a()", "first", "O(1)", "Basics", "a()"),
        Entry::new("idea", "second", CONCEPT, "Basics", "// idea"),
    ];

    #[test]
    fn test_static_group_is_borrowed() {
        assert_eq!(GROUP.len(), 2);
        assert!(matches!(GROUP[0].signature, Cow::Borrowed("a()")));
    }

    #[test]
    fn test_concept_tag() {
        assert!(!GROUP[0].is_concept());
        assert!(GROUP[1].is_concept());
    }

    #[test]
    fn test_deserialized_entry_matches_static() {
        let json = r#"{
            "signature": "a()",
            "description": "first",
            "complexity": "O(1)",
            "section": "Basics",
            "example": "a()"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, GROUP[0]);
    }
}
