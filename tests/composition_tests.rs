//! Composition Integration Tests
//!
//! Checks the composition properties end to end (compose -> register ->
//! group -> render) and the invariants of the built-in catalog.

use entry_catalog::corpus::builtin::{self, searching, sorting};
use entry_catalog::{
    compose, concatenate, group_by_section, slice, Catalog, Composition, Entry, MarkdownRenderer,
    PageMetadata, PageRegistry, PageRenderer, ProblemCounts, Step, ViewRenderer,
};

static M1: &[Entry] = &[
    Entry::new("e1", "first", "O(1)", "A", "one()"),
    Entry::new("e2", "second", "O(1)", "B", "two()"),
];
static M2: &[Entry] = &[Entry::new("e3", "third", "O(1)", "A", "three()")];

fn signatures(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.signature.to_string()).collect()
}

// ============================================================================
// Section 1: Concatenate / Slice / Compose
// ============================================================================

#[test]
fn test_concatenate_length_and_order() {
    for (a, b) in [(M1, M2), (M2, M1), (M1, M1), (&M1[..0], M2)] {
        let joined = concatenate(&[a, b]);
        assert_eq!(joined.len(), a.len() + b.len());
        let expected: Vec<&Entry> = a.iter().chain(b.iter()).collect();
        assert_eq!(joined, expected);
    }
}

#[test]
fn test_compose_scenario() {
    let page = compose(&[Step::All(M1), Step::All(M2)]);
    assert_eq!(signatures(&page), vec!["e1", "e2", "e3"]);

    let groups = group_by_section(&page);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "A");
    assert_eq!(signatures(&groups[0].entries), vec!["e1", "e3"]);
    assert_eq!(groups[1].name, "B");
    assert_eq!(signatures(&groups[1].entries), vec!["e2"]);
}

#[test]
fn test_slice_does_not_alias_source() {
    let mut head = slice(M1, 0, 1);
    assert_eq!(signatures(&head), vec!["e1"]);

    // Mutating the result (list and owned copies of its entries) leaves M1 alone
    head.push(&M2[0]);
    head.swap(0, 1);
    let mut owned: Vec<Entry> = head.iter().map(|&e| e.clone()).collect();
    owned[1].section = "Z".into();
    assert_eq!(owned[1].signature, "e1");
    assert_eq!(owned[1].section, "Z");

    assert_eq!(M1.len(), 2);
    assert_eq!(M1[0].signature, "e1");
    assert_eq!(M1[0].section, "A");
    assert_eq!(M1[1].signature, "e2");
}

#[test]
fn test_overlapping_compositions_are_independent() {
    let mut first = Composition::new().range(M1, 0, 2).build();
    let second = Composition::new().range(M1, 1, 2).all(M2).build();

    first.clear();
    assert!(first.is_empty());
    assert_eq!(signatures(&second), vec!["e2", "e3"]);
    assert_eq!(M1.len(), 2);
}

#[test]
fn test_composition_is_deterministic() {
    let build = || {
        Composition::new()
            .rest(sorting::SORTING_DIVIDE_CONQUER, 1)
            .range(searching::BINARY_SEARCH, 0, 2)
            .all(M2)
            .build()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_malformed_ranges_degrade_to_empty() {
    assert!(slice(M1, 2, 1).is_empty());
    assert!(slice(M1, -3, 1).is_empty());
    assert_eq!(slice(M1, 0, 100).len(), 2);

    let page = Composition::new().range(M1, 5, 1).all(M2).build();
    assert_eq!(signatures(&page), vec!["e3"]);
}

// ============================================================================
// Section 2: Pages and rendering
// ============================================================================

#[test]
fn test_tabs_without_base_path_render_without_tab() {
    let mut registry = PageRegistry::new();
    let meta = PageMetadata {
        label: "Broken tabs".into(),
        has_tabs: true,
        problem_category: Some("sorting".into()),
        ..Default::default()
    };
    let page = registry
        .register("broken", meta, Composition::new().all(M1).all(M2).build())
        .unwrap();

    let counts: ProblemCounts = [("sorting", 3)].into_iter().collect();
    let view = ViewRenderer.render(page, &counts);
    assert!(view.tab.is_none());
    assert_eq!(view.entry_count, 3);

    let md = MarkdownRenderer::default().render(page, &counts);
    assert!(!md.contains("Problems ("));
    assert!(md.contains("## A"));
}

// ============================================================================
// Section 3: Built-in catalog
// ============================================================================

#[test]
fn test_builtin_catalog_is_consistent() {
    let catalog = Catalog::builtin();
    assert!(!catalog.registry.is_empty());
    assert!(catalog.registry.validate().is_empty());

    for page in catalog.registry.iter() {
        assert!(!page.is_empty(), "page {} is empty", page.topic_key());
        let view = ViewRenderer.render(page, catalog.problem_counts);
        let grouped: usize = view.sections.iter().map(|s| s.entries.len()).sum();
        assert_eq!(grouped, page.len());
    }
}

#[test]
fn test_every_builtin_group_is_used() {
    let registry = builtin::registry();
    for (name, group) in builtin::groups() {
        for entry in group {
            let used = registry
                .iter()
                .any(|page| page.entries().iter().any(|&e| std::ptr::eq(e, entry)));
            assert!(used, "entry {} of group {} is on no page", entry.signature, name);
        }
    }
}

#[test]
fn test_cross_topic_pages_share_entries_by_reference() {
    let registry = builtin::registry();
    let essentials = registry.get("interview-essentials").unwrap();
    let concepts = registry.get("core-concepts").unwrap();

    // quick_sort is reused by both pages from the same source slot
    let quick = &sorting::SORTING_DIVIDE_CONQUER[1];
    assert!(essentials.entries().iter().any(|&e| std::ptr::eq(e, quick)));
    assert!(concepts.entries().iter().any(|&e| std::ptr::eq(e, quick)));
}

#[test]
fn test_builtin_tabs_resolve_counts() {
    let catalog = Catalog::builtin();
    let view = ViewRenderer.render(catalog.registry.get("sorting").unwrap(), catalog.problem_counts);
    let tab = view.tab.unwrap();
    assert_eq!(tab.base_path, "/sorting");
    assert_eq!(tab.count, 14);
}
