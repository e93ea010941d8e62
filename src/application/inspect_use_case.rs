// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Builds both blocks from a GraphMlpConfig and reports:
//   - affine / normalization layer counts of the FeatureMlp
//   - trainable parameter counts of each block
//
// Building the blocks also runs their config validation, so an
// invalid layer count or dropout rate surfaces here.

use anyhow::Result;
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::application::{CpuBackend, DeviceKind, GpuBackend};
use crate::ml::GraphMlpConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockReport {
    pub feature_layers:    usize,
    pub feature_norms:     usize,
    pub feature_linear:    bool,
    pub feature_params:    usize,
    pub classifier_params: usize,
    pub num_classes:       usize,
}

pub struct InspectUseCase {
    model:  GraphMlpConfig,
    device: DeviceKind,
}

impl InspectUseCase {
    pub fn new(model: GraphMlpConfig, device: DeviceKind) -> Self {
        Self { model, device }
    }

    pub fn execute(&self) -> Result<BlockReport> {
        match self.device {
            DeviceKind::Cpu => self.run::<CpuBackend>(&Default::default()),
            DeviceKind::Gpu => self.run::<GpuBackend>(&Default::default()),
        }
    }

    fn run<B: Backend>(&self, device: &B::Device) -> Result<BlockReport> {
        let blocks = self.model.init::<B>(device)?;

        let report = BlockReport {
            feature_layers:    blocks.feature.num_layers(),
            feature_norms:     blocks.feature.num_norms(),
            feature_linear:    blocks.feature.is_linear(),
            feature_params:    blocks.feature.num_params(),
            classifier_params: blocks.classifier.num_params(),
            num_classes:       blocks.classifier.num_classes(),
        };
        tracing::info!(
            "Built blocks: {} linear / {} norm layers, {} + {} parameters",
            report.feature_layers, report.feature_norms,
            report.feature_params, report.classifier_params,
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{classifier::OutputClassifierConfig, feature_mlp::FeatureMlpConfig};

    #[test]
    fn test_reports_structure_and_params() {
        let cfg = GraphMlpConfig::new(
            FeatureMlpConfig::new(3, 4, 8, 2),
            OutputClassifierConfig::new(8, 3, 0.5),
        );
        let report = InspectUseCase::new(cfg, DeviceKind::Cpu).execute().unwrap();

        assert_eq!(report.feature_layers, 3);
        assert_eq!(report.feature_norms, 2);
        assert!(!report.feature_linear);
        // affine weights + biases alone: 4*8+8 + 8*8+8 + 8*2+2
        assert!(report.feature_params >= 40 + 72 + 18);
        // readout 8+1, head 8*3+3
        assert!(report.classifier_params >= 9 + 27);
        assert_eq!(report.num_classes, 3);
    }

    #[test]
    fn test_linear_model_params() {
        let cfg = GraphMlpConfig::new(
            FeatureMlpConfig::new(1, 4, 8, 2),
            OutputClassifierConfig::new(8, 3, 0.0),
        );
        let report = InspectUseCase::new(cfg, DeviceKind::Cpu).execute().unwrap();

        assert!(report.feature_linear);
        assert_eq!(report.feature_norms, 0);
        assert_eq!(report.feature_params, 4 * 2 + 2);
    }

    #[test]
    fn test_invalid_layer_count_surfaces() {
        let cfg = GraphMlpConfig::new(
            FeatureMlpConfig::new(0, 4, 8, 2),
            OutputClassifierConfig::new(8, 3, 0.5),
        );
        let err = InspectUseCase::new(cfg, DeviceKind::Cpu).execute().unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }
}
