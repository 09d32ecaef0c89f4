//! View Builder - Converts page descriptors to view models
//!
//! Groups the composed entries by section and resolves the optional tab
//! through the problem-count lookup.

use crate::entry::Entry;
use crate::lookup::ProblemCountLookup;
use crate::registry::PageDescriptor;
use crate::render::view_models::*;
use crate::render::PageRenderer;
use crate::sections::SectionGroup;

/// Build the full page view for `page`.
pub fn build_page_view(page: &PageDescriptor<'_>, lookup: &dyn ProblemCountLookup) -> PageView {
    let meta = page.metadata();

    PageView {
        topic_key: page.topic_key().to_string(),
        label: meta.label.clone(),
        badge: meta.badge.clone(),
        color_token: meta.color_token.clone(),
        description: meta.description.clone(),
        intro_text: meta.intro_text.clone(),
        cross_reference: meta.cross_reference.clone(),
        tab: build_tab(page, lookup),
        entry_count: page.len(),
        sections: page.sections().iter().map(build_section).collect(),
    }
}

/// Build the index row for `page`.
pub fn build_page_summary(page: &PageDescriptor<'_>) -> PageSummary {
    let meta = page.metadata();

    PageSummary {
        topic_key: page.topic_key().to_string(),
        label: meta.label.clone(),
        badge: meta.badge.clone(),
        color_token: meta.color_token.clone(),
        description: meta.description.clone(),
        entry_count: page.len(),
        section_count: page.section_order().len(),
        has_tab: page.tab().is_some(),
    }
}

pub fn tab_label(count: u32) -> String {
    format!("Problems ({})", count)
}

fn build_tab(page: &PageDescriptor<'_>, lookup: &dyn ProblemCountLookup) -> Option<TabView> {
    let tab = page.tab()?;
    let count = lookup.count(tab.problem_category);
    Some(TabView {
        label: tab_label(count),
        base_path: tab.base_path.to_string(),
        problem_category: tab.problem_category.to_string(),
        count,
    })
}

fn build_section(group: &SectionGroup<'_>) -> SectionView {
    SectionView {
        name: group.name.to_string(),
        entries: group.entries.iter().map(|entry| build_entry(entry)).collect(),
    }
}

fn build_entry(entry: &Entry) -> EntryView {
    EntryView {
        signature: entry.signature.to_string(),
        description: entry.description.to_string(),
        complexity: entry.complexity.to_string(),
        is_concept: entry.is_concept(),
        example: entry.example.to_string(),
    }
}

/// Renderer producing [`PageView`]s for the JSON API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewRenderer;

impl PageRenderer for ViewRenderer {
    type Output = PageView;

    fn render(&self, page: &PageDescriptor<'_>, lookup: &dyn ProblemCountLookup) -> PageView {
        build_page_view(page, lookup)
    }
}
