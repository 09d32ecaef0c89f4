//! Page Descriptor Registry
//!
//! Maps topic keys to page descriptors: presentation metadata plus the
//! composed entry list for the page. The registry is filled once while the
//! corpus loads and only read afterwards, so it can be shared freely between
//! threads.
//!
//! Pages iterate in registration order; lookup by key goes through an
//! `FxHashMap` index into that list.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{CatalogError, Result};
use crate::sections::{group_by_section, section_order, SectionGroup};

// ============================================================================
// Page metadata and descriptors
// ============================================================================

/// Display metadata for a page. Opaque to the composition logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub label: String,
    pub badge: String,
    pub color_token: String,
    pub description: String,
    pub intro_text: String,
    pub has_tabs: bool,
    pub base_path: Option<String>,
    pub problem_category: Option<String>,
    /// Topic key of a related page
    pub cross_reference: Option<String>,
}

/// Complete tab metadata; only exists when the page can actually show a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec<'p> {
    pub base_path: &'p str,
    pub problem_category: &'p str,
}

/// One browsable topic page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor<'a> {
    topic_key: String,
    metadata: PageMetadata,
    entries: Vec<&'a Entry>,
}

impl<'a> PageDescriptor<'a> {
    pub fn topic_key(&self) -> &str {
        &self.topic_key
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tab metadata, if the page asks for tabs and has everything a tab needs.
    ///
    /// A page with `has_tabs` but no `base_path` or `problem_category` simply
    /// renders without the tab.
    pub fn tab(&self) -> Option<TabSpec<'_>> {
        if !self.metadata.has_tabs {
            return None;
        }
        Some(TabSpec {
            base_path: self.metadata.base_path.as_deref()?,
            problem_category: self.metadata.problem_category.as_deref()?,
        })
    }

    pub fn sections(&self) -> Vec<SectionGroup<'a>> {
        group_by_section(&self.entries)
    }

    pub fn section_order(&self) -> Vec<&'a str> {
        section_order(&self.entries)
    }
}

// ============================================================================
// Validation warnings
// ============================================================================

/// Non-fatal inconsistencies found by [`PageRegistry::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
    /// `cross_reference` names a topic key that is not registered
    DanglingCrossReference { page: String, target: String },
    /// `has_tabs` is set but a required tab field is missing
    IncompleteTabs { page: String, missing: &'static str },
    /// The page composed to zero entries
    EmptyPage { page: String },
}

impl fmt::Display for RegistryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryWarning::DanglingCrossReference { page, target } => {
                write!(f, "page '{}' cross-references unknown page '{}'", page, target)
            }
            RegistryWarning::IncompleteTabs { page, missing } => {
                write!(f, "page '{}' has tabs enabled but no {}; tab omitted", page, missing)
            }
            RegistryWarning::EmptyPage { page } => write!(f, "page '{}' has no entries", page),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Keys are written out as `<key>.md`, so they must stay inside the output directory.
fn is_valid_topic_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '\\']) && !key.contains("..")
}

#[derive(Debug, Clone, Default)]
pub struct PageRegistry<'a> {
    pages: Vec<PageDescriptor<'a>>,
    index: FxHashMap<String, usize>,
}

impl<'a> PageRegistry<'a> {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Register a page built from `metadata` and an already composed entry list.
    ///
    /// Rejects a topic key that is already registered, or one that is not a
    /// plain file name, and leaves the registry unchanged in that case.
    pub fn register(
        &mut self,
        topic_key: impl Into<String>,
        metadata: PageMetadata,
        entries: Vec<&'a Entry>,
    ) -> Result<&PageDescriptor<'a>> {
        let topic_key = topic_key.into();
        if !is_valid_topic_key(&topic_key) {
            return Err(CatalogError::InvalidTopicKey(topic_key));
        }
        if self.index.contains_key(&topic_key) {
            return Err(CatalogError::DuplicateTopic(topic_key));
        }

        tracing::debug!("Registering page '{}' with {} entries", topic_key, entries.len());

        let slot = self.pages.len();
        self.index.insert(topic_key.clone(), slot);
        self.pages.push(PageDescriptor {
            topic_key,
            metadata,
            entries,
        });
        Ok(&self.pages[slot])
    }

    pub fn get(&self, topic_key: &str) -> Option<&PageDescriptor<'a>> {
        self.index.get(topic_key).map(|&slot| &self.pages[slot])
    }

    /// Like [`get`](Self::get), but a missing page is an error.
    pub fn require(&self, topic_key: &str) -> Result<&PageDescriptor<'a>> {
        self.get(topic_key)
            .ok_or_else(|| CatalogError::PageNotFound(topic_key.to_string()))
    }

    pub fn contains(&self, topic_key: &str) -> bool {
        self.index.contains_key(topic_key)
    }

    /// Pages in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor<'a>> {
        self.pages.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|page| page.topic_key())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Collect non-fatal inconsistencies and log each as a warning.
    pub fn validate(&self) -> Vec<RegistryWarning> {
        let mut warnings = Vec::new();

        for page in &self.pages {
            let meta = &page.metadata;

            if let Some(target) = &meta.cross_reference {
                if !self.contains(target) {
                    warnings.push(RegistryWarning::DanglingCrossReference {
                        page: page.topic_key.clone(),
                        target: target.clone(),
                    });
                }
            }

            if meta.has_tabs {
                if meta.base_path.is_none() {
                    warnings.push(RegistryWarning::IncompleteTabs {
                        page: page.topic_key.clone(),
                        missing: "base_path",
                    });
                }
                if meta.problem_category.is_none() {
                    warnings.push(RegistryWarning::IncompleteTabs {
                        page: page.topic_key.clone(),
                        missing: "problem_category",
                    });
                }
            }

            if page.entries.is_empty() {
                warnings.push(RegistryWarning::EmptyPage {
                    page: page.topic_key.clone(),
                });
            }
        }

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Composition;

    static M1: &[Entry] = &[
        Entry::new("e1", "", "O(1)", "A", ""),
        Entry::new("e2", "", "O(1)", "B", ""),
    ];
    static M2: &[Entry] = &[Entry::new("e3", "", "O(1)", "A", "")];

    fn meta(label: &str) -> PageMetadata {
        PageMetadata {
            label: label.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PageRegistry::new();
        let page = registry
            .register("basics", meta("Basics"), Composition::new().all(M1).all(M2).build())
            .unwrap();
        assert_eq!(page.topic_key(), "basics");
        assert_eq!(page.len(), 3);

        let found = registry.get("basics").unwrap();
        assert_eq!(found.metadata().label, "Basics");
        assert!(registry.get("missing").is_none());
        assert!(matches!(registry.require("missing"), Err(CatalogError::PageNotFound(_))));
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let mut registry = PageRegistry::new();
        registry.register("basics", meta("First"), M1.iter().collect()).unwrap();
        let err = registry.register("basics", meta("Second"), M2.iter().collect());
        assert!(matches!(err, Err(CatalogError::DuplicateTopic(key)) if key == "basics"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("basics").unwrap().metadata().label, "First");
    }

    #[test]
    fn test_path_like_topic_keys_rejected() {
        let mut registry = PageRegistry::new();
        for key in ["", "../../escaped", "a/b", "a\\b", "..", "x..y"] {
            let err = registry.register(key, meta("Bad"), M1.iter().collect());
            assert!(matches!(err, Err(CatalogError::InvalidTopicKey(k)) if k == key));
        }
        assert!(registry.is_empty());

        registry.register("dynamic-programming", meta("DP"), M1.iter().collect()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registration_order_kept() {
        let mut registry = PageRegistry::new();
        for key in ["zeta", "alpha", "mid"] {
            registry.register(key, meta(key), M1.iter().collect()).unwrap();
        }
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_tab_requires_base_path_and_category() {
        let mut registry = PageRegistry::new();
        let incomplete = PageMetadata {
            has_tabs: true,
            problem_category: Some("sorting".into()),
            ..Default::default()
        };
        let complete = PageMetadata {
            has_tabs: true,
            base_path: Some("/sorting".into()),
            problem_category: Some("sorting".into()),
            ..Default::default()
        };
        let disabled = PageMetadata {
            has_tabs: false,
            base_path: Some("/x".into()),
            problem_category: Some("x".into()),
            ..Default::default()
        };
        registry.register("incomplete", incomplete, M1.iter().collect()).unwrap();
        registry.register("complete", complete, M1.iter().collect()).unwrap();
        registry.register("disabled", disabled, M1.iter().collect()).unwrap();

        assert!(registry.get("incomplete").unwrap().tab().is_none());
        assert!(registry.get("disabled").unwrap().tab().is_none());
        assert_eq!(
            registry.get("complete").unwrap().tab(),
            Some(TabSpec { base_path: "/sorting", problem_category: "sorting" })
        );
    }

    #[test]
    fn test_validate_reports_without_failing() {
        let mut registry = PageRegistry::new();
        let meta = PageMetadata {
            has_tabs: true,
            cross_reference: Some("nowhere".into()),
            ..Default::default()
        };
        registry.register("broken", meta, Vec::new()).unwrap();

        let warnings = registry.validate();
        assert_eq!(warnings.len(), 4);
        assert!(warnings.contains(&RegistryWarning::DanglingCrossReference {
            page: "broken".into(),
            target: "nowhere".into(),
        }));
        assert!(warnings.contains(&RegistryWarning::EmptyPage { page: "broken".into() }));
    }

    #[test]
    fn test_page_sections_follow_composed_order() {
        let mut registry = PageRegistry::new();
        let page = registry
            .register("p", meta("P"), Composition::new().all(M1).all(M2).build())
            .unwrap();
        assert_eq!(page.section_order(), vec!["A", "B"]);
        let groups = page.sections();
        let a: Vec<&str> = groups[0].entries.iter().map(|e| &*e.signature).collect();
        assert_eq!(a, vec!["e1", "e3"]);
    }
}
