//! View Models for the catalog page API
//!
//! Owned, serializable snapshots of a page, produced by the view builder and
//! served as JSON. Field names are what the frontend consumes.

use serde::{Deserialize, Serialize};

/// Complete data for one rendered topic page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub topic_key: String,
    pub label: String,
    pub badge: String,
    pub color_token: String,
    pub description: String,
    pub intro_text: String,
    pub cross_reference: Option<String>,
    /// Present only when the page has complete tab metadata
    pub tab: Option<TabView>,
    pub entry_count: usize,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub label: String, // e.g. "Problems (12)"
    pub base_path: String,
    pub problem_category: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub name: String,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub signature: String,
    pub description: String,
    pub complexity: String,
    pub is_concept: bool,
    pub example: String,
}

/// Short listing row for page indexes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub topic_key: String,
    pub label: String,
    pub badge: String,
    pub color_token: String,
    pub description: String,
    pub entry_count: usize,
    pub section_count: usize,
    pub has_tab: bool,
}
