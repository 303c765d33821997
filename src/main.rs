//! apiref — regenerate the API reference section of a static documentation page.
//!
//! Fetches an OpenAPI/Swagger description, renders endpoint cards grouped by
//! tag plus matching sidebar links, and splices both into marker-delimited
//! regions of an existing HTML document:
//!
//! 1. **Fetch** — retrieve and decode the API description
//! 2. **Normalize** — one endpoint record per (operation, tag)
//! 3. **Group** — tag groups in declared order, empty groups dropped
//! 4. **Render** — reference body and sidebar navigation markup
//! 5. **Splice** — replace both regions and rewrite the document atomically

mod config;
mod error;
mod fetch;
mod group;
mod model;
mod normalize;
mod render;
mod splice;
mod target;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Config};
use log::{info, warn, LevelFilter};
use render::nav::NavRenderer;
use render::reference::ReferenceRenderer;
use render::Renderer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    // Keep stdout clean for the document in dry-run mode.
    init_logging(cli.verbosity, config.dry_run);

    run(&config).with_context(|| {
        format!(
            "failed to regenerate API reference in {}",
            config.target.display()
        )
    })
}

fn init_logging(level: LevelFilter, to_stderr: bool) {
    let target = if to_stderr {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    };
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(level)
        .target(target)
        .init();
}

/// Full pipeline. Nothing is written unless every required step succeeds.
fn run(config: &Config) -> error::Result<()> {
    info!("Fetching API description from {}", config.source);
    let doc = fetch::load(&config.source, config.timeout)?;
    info!("Loaded {} v{}", doc.info.title, doc.info.version);

    let endpoints = normalize::normalize(&doc);
    let endpoint_count = endpoints.len();
    let groups = group::group(&doc.tags, endpoints);
    info!("{} endpoints in {} tags", endpoint_count, groups.len());
    for name in render::unreachable_anchors(&groups) {
        warn!("tag {:?} has an empty or duplicate anchor id", name);
    }

    let base_url = doc
        .base_url()
        .unwrap_or_else(|| config.fallback_base_url.clone());
    let body = ReferenceRenderer::new(base_url).render(&groups);
    let nav = NavRenderer.render(&groups);

    let current = target::read(&config.target)?;
    let spliced = splice::splice(&current, &config.markers, &body, &nav)?;

    if config.dry_run {
        print!("{}", spliced.text);
        return Ok(());
    }

    if spliced.text == current {
        info!("{} is already up to date", config.target.display());
        return Ok(());
    }

    target::write(&config.target, &spliced.text)?;
    info!(
        "Wrote {} ({} bytes{})",
        config.target.display(),
        spliced.text.len(),
        if spliced.sidebar_updated {
            ""
        } else {
            ", sidebar unchanged"
        }
    );
    Ok(())
}
