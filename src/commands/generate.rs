//! Generate static post pages

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::{GenerateSummary, Generator};
use crate::Site;

/// Generate the post pages, honoring the revalidate window
pub fn run(site: &Site, force: bool) -> Result<GenerateSummary> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    let summary = generator.generate(force)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages ({} fresh, {} unresolved, {} pruned) in {:.2}s",
        summary.rendered,
        summary.fresh,
        summary.unresolved,
        summary.pruned,
        duration.as_secs_f64()
    );

    Ok(summary)
}

/// Watch the content export and site config, regenerating on change.
///
/// Regeneration is forced: a content change must override the revalidate
/// window, otherwise fresh outputs would mask the edit.
pub async fn watch(site: Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if site.content_path.exists() {
        watcher.watch(&site.content_path, notify::RecursiveMode::NonRecursive)?;
    } else if let Some(parent) = site.content_path.parent() {
        // Watch the directory so the export appearing later is picked up
        if parent.exists() {
            watcher.watch(parent, notify::RecursiveMode::NonRecursive)?;
        }
    }

    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for content changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("Content changed, regenerating...");
                    if let Err(e) = run(&site, true) {
                        tracing::error!("Generation failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Continue waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
