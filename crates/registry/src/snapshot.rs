use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::interval;

use crate::config::RegistryConfig;
use crate::registry::Registry;

/// Single-writer handle for hosts that share the registry across
/// tasks: writers take the lock exclusively for the whole operation,
/// readers see a consistent (job table, title index) pair.
pub type SharedRegistry = Arc<RwLock<Registry>>;

const DEFAULT_SNAPSHOT_FILE: &str = "registry.json";

/// Resolve the snapshot path from `DATA_DIR` env or current directory.
pub fn snapshot_path() -> PathBuf {
    let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&dir).join(DEFAULT_SNAPSHOT_FILE)
}

/// Load a registry from the snapshot file. Falls back to an empty
/// registry with `config` if the file doesn't exist or can't be
/// parsed (first run).
pub fn load_registry(path: &Path, config: RegistryConfig) -> Registry {
    let data = match std::fs::read_to_string(path) {
        Ok(d) if !d.is_empty() => d,
        _ => {
            tracing::info!(?path, "no snapshot found, starting with an empty registry");
            return Registry::new(config);
        }
    };

    match serde_json::from_str::<Registry>(&data) {
        Ok(registry) => {
            tracing::info!(?path, jobs = registry.job_count(), "restored registry from snapshot");
            registry
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "failed to parse snapshot, starting fresh");
            Registry::new(config)
        }
    }
}

/// Persist the whole registry to disk as JSON.
pub fn save_registry(path: &Path, registry: &Registry) -> std::io::Result<()> {
    let data = serde_json::to_string_pretty(registry)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // Write to a temp file then rename for atomicity.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, data)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Spawn a background task that snapshots the registry at a fixed
/// interval.
pub fn spawn_snapshot_task(registry: SharedRegistry, path: PathBuf, period: Duration) {
    tokio::spawn(async move {
        let mut tick = interval(period);
        loop {
            tick.tick().await;
            let guard = registry.read().await;
            if let Err(e) = save_registry(&path, &guard) {
                tracing::warn!(error = %e, "failed to persist registry snapshot");
            } else {
                tracing::debug!("registry snapshot written");
            }
        }
    });
}
