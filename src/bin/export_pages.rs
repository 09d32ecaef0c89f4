//! Export Catalog Pages
//!
//! Renders every registered page to markdown and/or JSON view models and
//! writes an index.json listing the pages in registration order.
//! Run with: cargo run --bin export_pages
//!
//! Configuration comes from the environment (see `entry_catalog::config`).

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use entry_catalog::config::CatalogConfig;
use entry_catalog::render::build_page_summary;
use entry_catalog::{Catalog, MarkdownRenderer, PageRenderer, ViewRenderer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entry_catalog=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_DIR: {:?}", config.catalog_dir);
    tracing::info!("  OUTPUT_DIR: {}", config.output_dir.display());
    tracing::info!("  EXPORT_FORMAT: {:?}", config.export_format);

    let catalog = Catalog::load(config.catalog_dir.as_deref())?;
    let out_dir = config.output_dir.as_path();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let markdown = MarkdownRenderer::default();
    for page in catalog.registry.iter() {
        let key = page.topic_key();

        if config.export_format.markdown() {
            let doc = markdown.render(page, catalog.problem_counts);
            write_file(&out_dir.join(format!("{}.md", key)), &doc)?;
        }
        if config.export_format.json() {
            let view = ViewRenderer.render(page, catalog.problem_counts);
            write_file(&out_dir.join(format!("{}.json", key)), &serde_json::to_string_pretty(&view)?)?;
        }

        tracing::info!("Exported {} ({} entries, {} sections)", key, page.len(), page.section_order().len());
    }

    let summaries: Vec<_> = catalog.registry.iter().map(build_page_summary).collect();
    let index = serde_json::json!({
        "generated": chrono::Utc::now().to_rfc3339(),
        "pages": summaries,
    });
    write_file(&out_dir.join("index.json"), &serde_json::to_string_pretty(&index)?)?;

    tracing::info!("Exported {} pages to {}", catalog.registry.len(), out_dir.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
