//! Built-in catalog content.
//!
//! Entry groups are authored as `static` slices, so every page composed from
//! them borrows for `'static` and the registry can be built once and shared
//! for the life of the process.

pub mod data_structures;
pub mod dynamic_programming;
pub mod graphs;
pub mod pages;
pub mod searching;
pub mod sorting;

use std::sync::OnceLock;

use crate::entry::EntryGroup;
use crate::error::Result;
use crate::lookup::ProblemCounts;
use crate::registry::PageRegistry;

/// Every built-in entry group with a stable name.
pub fn groups() -> Vec<(&'static str, EntryGroup<'static>)> {
    vec![
        ("sorting.quadratic", sorting::SORTING_QUADRATIC),
        ("sorting.divide_conquer", sorting::SORTING_DIVIDE_CONQUER),
        ("sorting.linear", sorting::SORTING_LINEAR),
        ("searching.binary", searching::BINARY_SEARCH),
        ("searching.two_pointers", searching::TWO_POINTERS),
        ("graphs.traversal", graphs::GRAPH_TRAVERSAL),
        ("graphs.shortest_paths", graphs::SHORTEST_PATHS),
        ("dp.foundations", dynamic_programming::DP_FOUNDATIONS),
        ("dp.classics", dynamic_programming::DP_CLASSICS),
        ("ds.stacks_queues", data_structures::STACKS_QUEUES),
        ("ds.heaps", data_structures::HEAPS),
    ]
}

/// Build the built-in registry, failing on the first duplicate topic key.
pub fn try_build_registry() -> Result<PageRegistry<'static>> {
    let mut registry = PageRegistry::new();
    for page in pages::page_definitions() {
        registry.register(page.topic_key, page.metadata, page.entries)?;
    }
    Ok(registry)
}

/// The shared built-in registry, built on first access.
///
/// Pages that fail to register are skipped with an error log; the test
/// suite checks that none do.
pub fn registry() -> &'static PageRegistry<'static> {
    static REGISTRY: OnceLock<PageRegistry<'static>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = PageRegistry::new();
        for page in pages::page_definitions() {
            if let Err(e) = registry.register(page.topic_key, page.metadata, page.entries) {
                tracing::error!("Skipping built-in page: {}", e);
            }
        }
        registry.validate();
        tracing::info!("Built-in catalog ready: {} pages", registry.len());
        registry
    })
}

/// Problem counts for the built-in tab categories.
pub fn problem_counts() -> &'static ProblemCounts {
    static COUNTS: OnceLock<ProblemCounts> = OnceLock::new();
    COUNTS.get_or_init(|| {
        [("sorting", 14), ("searching", 11), ("graphs", 9), ("dp", 17)]
            .into_iter()
            .collect()
    })
}
