//! Directory corpus loader.
//!
//! Layout:
//! - `groups/*.json`: one entry group per file, file stem = group name,
//!   content = JSON array of entries
//! - `pages.json`: array of page specs (topic key, metadata, compose steps)
//! - `problem_counts.json` (optional): object of category -> count
//!
//! Groups load in file-name order so repeated loads produce identical
//! registries.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::compose::{compose, Step};
use crate::entry::Entry;
use crate::error::{CatalogError, Result};
use crate::lookup::ProblemCounts;
use crate::registry::{PageMetadata, PageRegistry};

// ============================================================================
// Manifest types
// ============================================================================

/// One page in `pages.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub topic_key: String,
    #[serde(flatten)]
    pub metadata: PageMetadata,
    pub steps: Vec<StepSpec>,
}

/// A compose step naming its source group.
///
/// Without bounds the whole group is used; `start` alone means "to the end";
/// `end` alone means "from the beginning".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl StepSpec {
    fn to_step<'a>(&self, source: &'a [Entry]) -> Step<'a, Entry> {
        match (self.start, self.end) {
            (None, None) => Step::All(source),
            (Some(start), None) => Step::From { source, start },
            (start, Some(end)) => Step::Range {
                source,
                start: start.unwrap_or(0),
                end,
            },
        }
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// Entry groups, page specs and problem counts loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    groups: Vec<(String, Vec<Entry>)>,
    group_index: FxHashMap<String, usize>,
    pages: Vec<PageSpec>,
    problem_counts: ProblemCounts,
}

impl Corpus {
    /// Load a corpus directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::info!("Loading catalog corpus from {}", dir.display());

        let groups_dir = dir.join("groups");
        let listing = fs::read_dir(&groups_dir)
            .map_err(|e| CatalogError::io(groups_dir.display().to_string(), e))?;

        let mut files = Vec::new();
        for item in listing {
            let path = item
                .map_err(|e| CatalogError::io(groups_dir.display().to_string(), e))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                files.push(path);
            }
        }
        files.sort();

        let mut corpus = Corpus::default();
        for path in files {
            let name = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => {
                    tracing::warn!("Skipping group file with non UTF-8 name: {}", path.display());
                    continue;
                }
            };
            let entries: Vec<Entry> = read_json(&path)?;
            tracing::debug!("Loaded group '{}' ({} entries)", name, entries.len());
            corpus.insert_group(name, entries);
        }

        corpus.pages = read_json(&dir.join("pages.json"))?;

        let counts_path = dir.join("problem_counts.json");
        if counts_path.exists() {
            corpus.problem_counts = read_json(&counts_path)?;
        }

        tracing::info!(
            "Loaded {} groups, {} entries, {} page specs",
            corpus.groups.len(),
            corpus.entry_count(),
            corpus.pages.len()
        );
        Ok(corpus)
    }

    /// Assemble a corpus in memory. Later groups replace earlier ones with the same name.
    pub fn from_parts(
        groups: Vec<(String, Vec<Entry>)>,
        pages: Vec<PageSpec>,
        problem_counts: ProblemCounts,
    ) -> Self {
        let mut corpus = Corpus {
            pages,
            problem_counts,
            ..Default::default()
        };
        for (name, entries) in groups {
            corpus.insert_group(name, entries);
        }
        corpus
    }

    fn insert_group(&mut self, name: String, entries: Vec<Entry>) {
        match self.group_index.get(&name) {
            Some(&slot) => self.groups[slot].1 = entries,
            None => {
                self.group_index.insert(name.clone(), self.groups.len());
                self.groups.push((name, entries));
            }
        }
    }

    pub fn group(&self, name: &str) -> Option<&[Entry]> {
        self.group_index
            .get(name)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }

    pub fn problem_counts(&self) -> &ProblemCounts {
        &self.problem_counts
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Compose every page spec and register it. Pages borrow from the corpus.
    pub fn build_registry(&self) -> Result<PageRegistry<'_>> {
        let mut registry = PageRegistry::new();

        for spec in &self.pages {
            let mut steps = Vec::with_capacity(spec.steps.len());
            for step in &spec.steps {
                let source = self.group(&step.group).ok_or_else(|| CatalogError::UnknownGroup {
                    page: spec.topic_key.clone(),
                    group: step.group.clone(),
                })?;
                steps.push(step.to_step(source));
            }
            registry.register(spec.topic_key.clone(), spec.metadata.clone(), compose(&steps))?;
        }

        Ok(registry)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path.display().to_string(), e))?;
    serde_json::from_str(&text).map_err(|e| CatalogError::json(path.display().to_string(), e))
}
