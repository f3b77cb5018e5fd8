//! coolbar: a cool bar layout engine driven from a TOML description.
//!
//! Builds the bar described by the config file, restores the last saved
//! arrangement, replays the configured pointer script and saves the result.
//!
//! Run with:  `RUST_LOG=info coolbar [config.toml]`

use anyhow::{Context, Result};
use coolbar_core::{Event, Rect, Surface};
use coolbar_layout::{CoolBar, RecordingSurface};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("coolbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(coolbar_config::default_path);
    let config = coolbar_config::load(&config_path)
        .with_context(|| format!("loading '{}'", config_path.display()))?;

    let surface = RecordingSurface::new(config.bar.width, config.bar.height);
    let mut bar = CoolBar::from_config(surface, &config)?;

    let layout_path = coolbar_config::layout_path();
    if let Some(saved) = coolbar_config::load_layout(&layout_path)? {
        // A layout saved for a different item set is stale, not fatal.
        if let Err(e) = bar.apply_item_layout(&saved) {
            warn!("ignoring saved layout '{}': {e}", layout_path.display());
        }
    }

    for event in &config.script {
        if let Event::Resize { width } = *event {
            bar.surface_mut().set_width(width);
        }
        bar.handle_event(*event);
    }

    let width = bar.surface().client_width();
    let plan = bar.paint_plan(Rect::new(0, 0, width, bar.surface().size().height));
    info!(
        "{} items in {} rows, {}x{} px, {} paint ops",
        bar.item_count(),
        bar.rows().len(),
        width,
        bar.surface().size().height,
        plan.len()
    );
    for (index, row) in bar.rows().iter().enumerate() {
        for &id in row.items() {
            let item = bar.get(id)?;
            info!("row {index}: {:<12} {:?}", item.label(), item.bounds());
        }
    }

    coolbar_config::save_layout(&layout_path, &bar.item_layout())?;
    Ok(())
}
