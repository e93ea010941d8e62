// ============================================================
// Layer 2 — ForwardUseCase
// ============================================================
// Runs one forward pass of a single block:
//
//   Step 1: Pick a feature source   (Layer 4 - JSON file or seeded RNG)
//   Step 2: Seed the backend RNG    (weights and dropout masks follow `seed`)
//   Step 3: Build the block         (Layer 5 - validates its config)
//   Step 4: Batch features          (Layer 4 - FeatureMatrix → Tensor)
//   Step 5: Forward in the mode     (Layer 5)
//   Step 6: Read logits back        (Layer 4 - Tensor → rows)
//
// The NdArray RNG is process-wide, so two runs with one seed only
// match when nothing else draws from it in between.

use anyhow::{ensure, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::{CpuBackend, DeviceKind, GpuBackend};
use crate::data::{batcher::FeatureBatcher, loader::JsonMatrixLoader, synthetic::SyntheticSource};
use crate::domain::{mode::Mode, traits::FeatureSource};
use crate::ml::GraphMlpConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// FeatureMlp over [batch, input_dim]
    Mlp,
    /// OutputClassifier over [batch, hidden_dim, hidden_dim]
    Classifier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardConfig {
    pub block:      BlockKind,
    pub mode:       Mode,
    pub device:     DeviceKind,
    /// JSON features; a seeded random batch is used when absent.
    pub input:      Option<PathBuf>,
    pub batch_size: usize,
    pub seed:       u64,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            block:      BlockKind::Mlp,
            mode:       Mode::Eval,
            device:     DeviceKind::Cpu,
            input:      None,
            batch_size: 4,
            seed:       42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardReport {
    pub block: BlockKind,
    pub mode:  Mode,
    pub shape: [usize; 2],
    pub rows:  Vec<Vec<f32>>,
}

pub struct ForwardUseCase {
    model:  GraphMlpConfig,
    config: ForwardConfig,
}

impl ForwardUseCase {
    pub fn new(model: GraphMlpConfig, config: ForwardConfig) -> Self {
        Self { model, config }
    }

    pub fn execute(&self) -> Result<ForwardReport> {
        match self.config.device {
            DeviceKind::Cpu => self.run::<CpuBackend>(Default::default()),
            DeviceKind::Gpu => self.run::<GpuBackend>(Default::default()),
        }
    }

    fn source(&self) -> Result<Box<dyn FeatureSource>> {
        if let Some(path) = &self.config.input {
            return Ok(Box::new(JsonMatrixLoader::new(path.clone())));
        }
        ensure!(self.config.batch_size > 0, "batch size must be positive");

        let cols = match self.config.block {
            BlockKind::Mlp        => self.model.feature.input_dim,
            BlockKind::Classifier => self.model.classifier.hidden_dim,
        };
        let nodes = self.model.classifier.hidden_dim;
        Ok(Box::new(SyntheticSource::new(self.config.batch_size, nodes, cols, self.config.seed)))
    }

    fn run<B: Backend>(&self, device: B::Device) -> Result<ForwardReport> {
        let cfg     = &self.config;
        let source  = self.source()?;
        B::seed(&device, cfg.seed);
        let batcher = FeatureBatcher::<B>::new(device);

        let output = match cfg.block {
            BlockKind::Mlp => {
                let features = source.load_matrix()?;
                ensure!(
                    features.cols() == self.model.feature.input_dim,
                    "features have {} columns, the MLP expects input_dim={}",
                    features.cols(), self.model.feature.input_dim,
                );
                let mlp = self.model.feature.init::<B>(&batcher.device)?;
                mlp.forward(batcher.matrix(&features), cfg.mode)
            }
            BlockKind::Classifier => {
                let graphs = source.load_node_batch()?;
                let nodes  = batcher.nodes(&graphs)?;
                let hidden = self.model.classifier.hidden_dim;
                let [_, num_nodes, num_cols] = nodes.dims();
                ensure!(
                    num_nodes == hidden && num_cols == hidden,
                    "node batch is {num_nodes}x{num_cols} per graph, the classifier expects {hidden}x{hidden}",
                );
                let classifier = self.model.classifier.init::<B>(&batcher.device)?;
                classifier.forward(nodes, cfg.mode)
            }
        };

        let shape = output.dims();
        let rows  = batcher.rows(output)?;
        tracing::info!("{:?} forward in {} mode → {:?}", cfg.block, cfg.mode, shape);

        Ok(ForwardReport { block: cfg.block, mode: cfg.mode, shape, rows })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{classifier::OutputClassifierConfig, feature_mlp::FeatureMlpConfig};

    fn model() -> GraphMlpConfig {
        GraphMlpConfig::new(
            FeatureMlpConfig::new(2, 5, 6, 3),
            OutputClassifierConfig::new(6, 2, 0.5),
        )
    }

    #[test]
    fn test_mlp_forward_on_synthetic_batch() {
        let run = ForwardConfig { batch_size: 7, ..ForwardConfig::default() };
        let report = ForwardUseCase::new(model(), run).execute().unwrap();

        assert_eq!(report.shape, [7, 3]);
        assert_eq!(report.rows.len(), 7);
        assert!(report.rows.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_classifier_forward_on_synthetic_batch() {
        let run = ForwardConfig {
            block: BlockKind::Classifier,
            mode:  Mode::Train,
            batch_size: 3,
            ..ForwardConfig::default()
        };
        let report = ForwardUseCase::new(model(), run).execute().unwrap();
        assert_eq!(report.shape, [3, 2]);
    }

    #[test]
    fn test_mlp_forward_on_json_input() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.json");
        std::fs::write(&path, "[[0,1,2,3,4],[4,3,2,1,0]]").unwrap();

        let run = ForwardConfig { input: Some(path), ..ForwardConfig::default() };
        let report = ForwardUseCase::new(model(), run).execute().unwrap();
        assert_eq!(report.shape, [2, 3]);
    }

    #[test]
    fn test_wrong_input_width_is_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.json");
        std::fs::write(&path, "[[0,1,2],[4,3,2]]").unwrap();

        let run = ForwardConfig { input: Some(path), ..ForwardConfig::default() };
        assert!(ForwardUseCase::new(model(), run).execute().is_err());
    }

    #[test]
    fn test_zero_batch_is_error() {
        let run = ForwardConfig { batch_size: 0, ..ForwardConfig::default() };
        assert!(ForwardUseCase::new(model(), run).execute().is_err());
    }
}
