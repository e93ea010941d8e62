// ============================================================
// Layer 5 — Output Classifier
// ============================================================
// Turns hidden node features into class logits.
//
//   nodes [batch, hidden, hidden]
//     → readout Linear(hidden, 1)     [batch, hidden, 1]
//     → drop trailing axis            [batch, hidden]
//     → BatchNorm(hidden) → ReLU → Dropout(p)
//     → head Linear(hidden, classes)  [batch, classes]
//
// Only the trailing singleton axis is removed, via reshape, so a
// batch of one graph keeps its batch axis. In Train mode a batch
// of one is normalized with the running statistics (see norm.rs),
// so its logits still depend on the input.

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
};

use crate::domain::error::{ModelError, ModelResult};
use crate::domain::mode::Mode;
use crate::ml::dropout::dropout;
use crate::ml::norm::{BatchNorm1d, BatchNormConfig};

#[derive(Config, Debug)]
pub struct OutputClassifierConfig {
    pub hidden_dim: usize,
    /// Number of classes.
    pub output_dim: usize,
    pub dropout:    f64,
}

impl OutputClassifierConfig {
    pub fn validate(&self) -> ModelResult<()> {
        if !(0.0..=1.0).contains(&self.dropout) {
            return Err(ModelError::InvalidConfig(format!(
                "dropout must be within [0, 1], got {}",
                self.dropout
            )));
        }
        Ok(())
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> ModelResult<OutputClassifier<B>> {
        self.validate()?;

        let readout = LinearConfig::new(self.hidden_dim, 1).init(device);
        let norm    = BatchNormConfig::new(self.hidden_dim).init(device);
        let head    = LinearConfig::new(self.hidden_dim, self.output_dim).init(device);

        tracing::debug!(
            "OutputClassifier: hidden={} classes={} dropout={}",
            self.hidden_dim, self.output_dim, self.dropout,
        );

        Ok(OutputClassifier { readout, norm, head, dropout: self.dropout })
    }
}

#[derive(Module, Debug)]
pub struct OutputClassifier<B: Backend> {
    pub readout: Linear<B>,
    pub norm:    BatchNorm1d<B>,
    pub head:    Linear<B>,
    pub dropout: f64,
}

impl<B: Backend> OutputClassifier<B> {
    /// nodes: [batch, hidden_dim, hidden_dim] → logits: [batch, output_dim]
    pub fn forward(&self, nodes: Tensor<B, 3>, mode: Mode) -> Tensor<B, 2> {
        let [batch_size, num_nodes, _] = nodes.dims();
        let scores = self.readout.forward(nodes).reshape([batch_size, num_nodes]);
        self.classify(scores, mode)
    }

    /// features: [batch, hidden_dim] → logits: [batch, output_dim]
    pub fn classify(&self, features: Tensor<B, 2>, mode: Mode) -> Tensor<B, 2> {
        let x = self.norm.forward(features, mode);
        let x = burn::tensor::activation::relu(x);
        let x = dropout(x, self.dropout, mode);
        self.head.forward(x)
    }

    pub fn num_classes(&self) -> usize {
        self.head.weight.val().dims()[1]
    }
}
