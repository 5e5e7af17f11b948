// ABOUTME: Watch module for monitoring the presentation document
// ABOUTME: Recompiles the resolved model whenever the YAML source changes

use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::{new_debouncer, DebounceEventResult};

use crate::compile;
use crate::errors::{Result, VitalityError};
use crate::utils;

/// Configuration for watch mode
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Path to the YAML document to watch
    pub config_path: PathBuf,

    /// Output JSON file path
    pub output: PathBuf,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,

    /// Whether to pretty-print the output
    pub pretty_json: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            output: PathBuf::new(),
            debounce_ms: 500,
            pretty_json: true,
        }
    }
}

/// Watch the document's directory and recompile on every relevant change.
///
/// Each recompilation is an independent pass; a failing pass is logged and
/// watching continues.
pub fn watch_presentation(config: &WatchConfig) -> Result<()> {
    utils::validate_file_exists(&config.config_path)?;

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| VitalityError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    let watch_path = match config.config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let abs_watch_path = utils::get_absolute_path(watch_path)?;
    debug!("Watching absolute path: {:?}", abs_watch_path);

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            VitalityError::WatchError(format!(
                "Failed to start watching directory {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    info!("Watching for changes in {:?}", watch_path);
    println!("Watching for changes in {:?} (Press Ctrl+C to stop)", watch_path);

    let mut last_processed = Instant::now();

    for result in rx {
        match result {
            Ok(events) => {
                let relevant_changes = events.iter().any(|event| {
                    event.paths.iter().any(|path| {
                        let is_relevant = is_relevant_path(path, config);
                        if is_relevant {
                            debug!("Detected relevant change in {:?}", path);
                        }
                        is_relevant
                    })
                });

                let now = Instant::now();
                if relevant_changes
                    && now.duration_since(last_processed) > Duration::from_millis(config.debounce_ms)
                {
                    println!("Re-generating presentation...");
                    match compile::compile_presentation(
                        &config.config_path,
                        &config.output,
                        config.pretty_json,
                    ) {
                        Ok(_) => {
                            info!("Regenerated presentation successfully");
                            last_processed = now;
                        }
                        Err(e) => error!("Error when compiling presentation: {}", e),
                    }
                }
            }
            Err(errors) => error!("Watch error: {:?}", errors),
        }
    }

    Ok(())
}

/// Checks if a changed path should trigger a recompile
fn is_relevant_path(path: &Path, config: &WatchConfig) -> bool {
    if path == config.config_path.as_path() {
        return true;
    }
    if let (Ok(changed), Ok(source)) = (
        utils::get_absolute_path(path),
        utils::get_absolute_path(&config.config_path),
    ) {
        if changed == source {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_relevant_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let source = dir.path().join("deck.yml");
        let other = dir.path().join("notes.yml");
        fs::write(&source, "slides: []").expect("Failed to write source");
        fs::write(&other, "").expect("Failed to write other");

        let config = WatchConfig {
            config_path: source.clone(),
            output: dir.path().join("deck.json"),
            ..Default::default()
        };

        assert!(is_relevant_path(&source, &config));
        assert!(!is_relevant_path(&other, &config));
        assert!(!is_relevant_path(&dir.path().join("deck.json"), &config));
    }

    #[test]
    fn test_watch_requires_existing_document() {
        let config = WatchConfig {
            config_path: PathBuf::from("/definitely/not/here.yml"),
            ..Default::default()
        };
        assert!(matches!(
            watch_presentation(&config),
            Err(VitalityError::PathNotFoundError(_))
        ));
    }
}
