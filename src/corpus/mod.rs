//! Catalog corpora.
//!
//! Two sources produce the same [`Catalog`]:
//! - `builtin`: entry groups compiled into the crate
//! - `loader`: a directory of JSON group files and a page manifest
//!
//! Either way the registry is built once and lives for the rest of the
//! process, so readers get plain `'static` references.

pub mod builtin;
pub mod loader;

pub use loader::{Corpus, PageSpec, StepSpec};

use std::path::Path;

use crate::error::Result;
use crate::lookup::ProblemCounts;
use crate::registry::PageRegistry;

/// A fully built, process-lifetime catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub registry: &'static PageRegistry<'static>,
    pub problem_counts: &'static ProblemCounts,
}

impl Catalog {
    /// The catalog compiled into the crate.
    pub fn builtin() -> Self {
        Catalog {
            registry: builtin::registry(),
            problem_counts: builtin::problem_counts(),
        }
    }

    /// Load a directory corpus and keep it for the rest of the process.
    ///
    /// Call once at startup: the corpus and registry are intentionally leaked
    /// so pages can be shared as `'static` data.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let corpus: &'static Corpus = Box::leak(Box::new(Corpus::load(dir)?));
        let registry = Box::leak(Box::new(corpus.build_registry()?));
        registry.validate();
        Ok(Catalog {
            registry,
            problem_counts: corpus.problem_counts(),
        })
    }

    /// Directory corpus when `dir` is set, built-in content otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => {
                tracing::info!("No corpus directory configured, using built-in catalog");
                Ok(Self::builtin())
            }
        }
    }
}
