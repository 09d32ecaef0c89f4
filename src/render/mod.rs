//! Page rendering.
//!
//! The catalog hands a [`PageDescriptor`] and a [`ProblemCountLookup`] to a
//! [`PageRenderer`]. Two renderers ship with the crate:
//! - [`ViewRenderer`]: serializable view models for the JSON API
//! - [`MarkdownRenderer`]: one markdown document per page

pub mod markdown;
pub mod view_builder;
pub mod view_models;

pub use markdown::MarkdownRenderer;
pub use view_builder::{build_page_summary, build_page_view, ViewRenderer};
pub use view_models::{EntryView, PageSummary, PageView, SectionView, TabView};

use crate::lookup::ProblemCountLookup;
use crate::registry::PageDescriptor;

/// Turns a page descriptor into a displayable page.
///
/// Implementations are expected to group entries by section in first-seen
/// order and to show a problems tab only when [`PageDescriptor::tab`] is
/// `Some`, labelled with the lookup's count for its category.
pub trait PageRenderer {
    type Output;

    fn render(&self, page: &PageDescriptor<'_>, lookup: &dyn ProblemCountLookup) -> Self::Output;
}
