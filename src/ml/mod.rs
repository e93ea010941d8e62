// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn-specific model code lives here.
//
//   norm.rs        — BatchNorm1d with explicit Train / Eval statistics
//   dropout.rs     — mode-aware dropout
//   feature_mlp.rs — FeatureMlp: 1..N affine layers with
//                    BatchNorm + ReLU between hidden layers
//   classifier.rs  — OutputClassifier: scalar readout, then
//                    BatchNorm → ReLU → Dropout → Linear head
//   capability.rs  — Block / Trainable traits over burn's
//                    Module, autodiff and Optimizer machinery
//
// Reference: Burn Book §3 (Building Blocks)
//            Xu et al. (2019) How Powerful are Graph Neural Networks?

pub mod norm;

pub mod dropout;

/// Multi-layer perceptron feature transformer
pub mod feature_mlp;

/// MLP output classifier
pub mod classifier;

pub mod capability;

use burn::prelude::*;

use crate::domain::error::ModelResult;
use crate::ml::{
    classifier::{OutputClassifier, OutputClassifierConfig},
    feature_mlp::{FeatureMlp, FeatureMlpConfig},
};

// ─── GraphMlpConfig ───────────────────────────────────────────────────────────
/// Both blocks' hyperparameters, persisted together.
#[derive(Config, Debug)]
pub struct GraphMlpConfig {
    pub feature:    FeatureMlpConfig,
    pub classifier: OutputClassifierConfig,
}

impl GraphMlpConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ModelResult<GraphMlpBlocks<B>> {
        Ok(GraphMlpBlocks {
            feature:    self.feature.init(device)?,
            classifier: self.classifier.init(device)?,
        })
    }
}

/// The two blocks built side by side. They do not feed each other;
/// an outer pipeline decides how to chain them.
#[derive(Module, Debug)]
pub struct GraphMlpBlocks<B: Backend> {
    pub feature:    FeatureMlp<B>,
    pub classifier: OutputClassifier<B>,
}
