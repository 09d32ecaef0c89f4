//! Entry Catalog
//!
//! A browsable reference catalog of programming techniques. Small entry
//! groups are composed into topic pages, grouped by section and handed to a
//! renderer.
//!
//! - `entry`: the `Entry` record and entry-group modules
//! - `compose`: concatenate / slice / compose combinators
//! - `sections`: first-seen section grouping
//! - `registry`: page descriptors keyed by topic
//! - `lookup`: problem-count lookup for page tabs
//! - `render`: renderer trait plus JSON view and markdown renderers
//! - `corpus`: built-in content and the JSON directory loader
//! - `config`: environment configuration for the binaries

pub mod compose;
pub mod config;
pub mod corpus;
pub mod entry;
pub mod error;
pub mod lookup;
pub mod registry;
pub mod render;
pub mod sections;

pub mod api_server;

// Re-export commonly used types
pub use compose::{compose, concatenate, slice, slice_from, Composition, Step};
pub use corpus::Catalog;
pub use entry::{Entry, EntryGroup, CONCEPT};
pub use error::{CatalogError, Result};
pub use lookup::{ProblemCountLookup, ProblemCounts};
pub use registry::{PageDescriptor, PageMetadata, PageRegistry, TabSpec};
pub use render::{MarkdownRenderer, PageRenderer, ViewRenderer};
pub use sections::{group_by_section, section_order, SectionGroup};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
