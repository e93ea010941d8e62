// ============================================================
// Layer 6 — Config Store
// ============================================================
// Persists the block hyperparameters:
//
//   {dir}/graph_mlp_config.json
//
// burn's #[derive(Config)] gives GraphMlpConfig serde support,
// so the file is plain pretty-printed JSON.

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::ml::GraphMlpConfig;

const CONFIG_FILE: &str = "graph_mlp_config.json";

pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn save(&self, cfg: &GraphMlpConfig) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create config directory '{}'", self.dir.display()))?;

        let path = self.path();
        write_config(&path, cfg)?;
        Ok(path)
    }

    pub fn load(&self) -> Result<GraphMlpConfig> {
        read_config(&self.path())
    }
}

/// Write a config to an explicit file path.
pub fn write_config(path: &Path, cfg: &GraphMlpConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved model config to '{}'", path.display());
    Ok(())
}

/// Read a config from an explicit file path.
pub fn read_config(path: &Path) -> Result<GraphMlpConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg: GraphMlpConfig = serde_json::from_str(&json)
        .with_context(|| format!("'{}' is not a valid model config", path.display()))?;

    tracing::debug!("Loaded model config from '{}'", path.display());
    Ok(cfg)
}
