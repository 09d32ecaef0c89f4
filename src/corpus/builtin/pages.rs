//! Built-in page definitions.
//!
//! Each page composes one or more entry groups. The two cross-topic pages at
//! the end reuse overlapping slices of the same groups.

use crate::compose::Composition;
use crate::entry::Entry;
use crate::registry::PageMetadata;

use super::data_structures::{HEAPS, STACKS_QUEUES};
use super::dynamic_programming::{DP_CLASSICS, DP_FOUNDATIONS};
use super::graphs::{GRAPH_TRAVERSAL, SHORTEST_PATHS};
use super::searching::{BINARY_SEARCH, TWO_POINTERS};
use super::sorting::{SORTING_DIVIDE_CONQUER, SORTING_LINEAR, SORTING_QUADRATIC};

/// A page ready to register.
pub struct BuiltinPage {
    pub topic_key: &'static str,
    pub metadata: PageMetadata,
    pub entries: Vec<&'static Entry>,
}

fn meta(label: &str, badge: &str, color_token: &str, description: &str, intro_text: &str) -> PageMetadata {
    PageMetadata {
        label: label.to_string(),
        badge: badge.to_string(),
        color_token: color_token.to_string(),
        description: description.to_string(),
        intro_text: intro_text.to_string(),
        ..Default::default()
    }
}

fn with_tabs(mut metadata: PageMetadata, base_path: &str, problem_category: &str) -> PageMetadata {
    metadata.has_tabs = true;
    metadata.base_path = Some(base_path.to_string());
    metadata.problem_category = Some(problem_category.to_string());
    metadata
}

fn see_also(mut metadata: PageMetadata, topic_key: &str) -> PageMetadata {
    metadata.cross_reference = Some(topic_key.to_string());
    metadata
}

pub fn page_definitions() -> Vec<BuiltinPage> {
    vec![
        BuiltinPage {
            topic_key: "sorting",
            metadata: see_also(
                with_tabs(
                    meta(
                        "Sorting",
                        "ALG",
                        "indigo",
                        "Comparison and non-comparison sorting algorithms.",
                        "Start with the quadratic sorts to learn the mechanics, then move to the n log n family.",
                    ),
                    "/sorting",
                    "sorting",
                ),
                "searching",
            ),
            entries: Composition::new()
                .all(SORTING_QUADRATIC)
                .all(SORTING_DIVIDE_CONQUER)
                .all(SORTING_LINEAR)
                .build(),
        },
        BuiltinPage {
            topic_key: "searching",
            metadata: see_also(
                with_tabs(
                    meta(
                        "Searching",
                        "ALG",
                        "sky",
                        "Binary search and pointer techniques over arrays.",
                        "Most of these need sorted input; pair them with the sorting page.",
                    ),
                    "/searching",
                    "searching",
                ),
                "sorting",
            ),
            entries: Composition::new().all(BINARY_SEARCH).all(TWO_POINTERS).build(),
        },
        BuiltinPage {
            topic_key: "graphs",
            metadata: with_tabs(
                meta(
                    "Graphs",
                    "ALG",
                    "emerald",
                    "Traversals and shortest paths.",
                    "Vertices are numbered 0..n and graphs are adjacency lists unless noted.",
                ),
                "/graphs",
                "graphs",
            ),
            entries: Composition::new().all(GRAPH_TRAVERSAL).all(SHORTEST_PATHS).build(),
        },
        BuiltinPage {
            topic_key: "dynamic-programming",
            metadata: with_tabs(
                meta(
                    "Dynamic Programming",
                    "DP",
                    "amber",
                    "Memoization, tabulation and the classic table problems.",
                    "Define the state, the transition and the base case before writing code.",
                ),
                "/dynamic-programming",
                "dp",
            ),
            entries: Composition::new().all(DP_FOUNDATIONS).all(DP_CLASSICS).build(),
        },
        BuiltinPage {
            topic_key: "data-structures",
            metadata: see_also(
                meta(
                    "Data Structures",
                    "DS",
                    "rose",
                    "Standard-library containers and the patterns built on them.",
                    "",
                ),
                "graphs",
            ),
            entries: Composition::new().all(STACKS_QUEUES).all(HEAPS).build(),
        },
        BuiltinPage {
            topic_key: "interview-essentials",
            metadata: see_also(
                meta(
                    "Interview Essentials",
                    "MIX",
                    "violet",
                    "The most frequently needed techniques from every topic.",
                    "A condensed review list; each entry links back to its full topic page.",
                ),
                "core-concepts",
            ),
            entries: Composition::new()
                .range(SORTING_DIVIDE_CONQUER, 0, 2)
                .range(BINARY_SEARCH, 0, 2)
                .range(TWO_POINTERS, 1, 2)
                .range(GRAPH_TRAVERSAL, 0, 2)
                .rest(DP_FOUNDATIONS, 1)
                .range(HEAPS, 0, 2)
                .build(),
        },
        BuiltinPage {
            topic_key: "core-concepts",
            metadata: see_also(
                meta(
                    "Core Concepts",
                    "MIX",
                    "slate",
                    "Ideas that recur across algorithms.",
                    "",
                ),
                "interview-essentials",
            ),
            entries: Composition::new()
                .range(SORTING_QUADRATIC, 3, 4)
                .range(SORTING_DIVIDE_CONQUER, 1, 4)
                .rest(GRAPH_TRAVERSAL, 3)
                .range(DP_FOUNDATIONS, 0, 1)
                .range(HEAPS, 2, 3)
                .build(),
        },
    ]
}
