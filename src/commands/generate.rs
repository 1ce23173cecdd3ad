//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Skinforge;

/// Generate the site from the record
pub fn run(app: &Skinforge) -> Result<()> {
    let start = std::time::Instant::now();

    let record = app.load_record()?;
    tracing::info!(
        "Loaded record {:?} with {} pages",
        record.site.name.as_deref().unwrap_or("(unnamed)"),
        record.site.pages.len()
    );

    let generator = Generator::new(app)?;
    generator.generate(&record)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch the record and static assets, regenerating on change
pub async fn watch(app: &Skinforge) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if app.data_path.exists() {
        watcher.watch(app.data_path.as_ref(), notify::RecursiveMode::NonRecursive)?;
    }

    if app.static_dir.exists() {
        watcher.watch(app.static_dir.as_ref(), notify::RecursiveMode::Recursive)?;
    }

    let config_path = app.base_dir.join("skinforge.yml");
    if config_path.exists() {
        watcher.watch(config_path.as_ref(), notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = run(app) {
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
