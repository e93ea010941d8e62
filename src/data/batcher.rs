// ============================================================
// Layer 4 — Feature Batcher
// ============================================================
// Moves validated FeatureMatrix values onto a Burn device and
// reads result tensors back into plain rows.
//
//   one matrix [rows, cols]            → Tensor<B, 2>
//   N node matrices, each [nodes, cols] → Tensor<B, 3> [N, nodes, cols]
//
// The node matrices are flattened graph by graph, then reshaped,
// so row-major order is kept end to end.

use burn::{prelude::*, tensor::TensorData};

use crate::domain::error::{ModelError, ModelResult};
use crate::domain::feature_matrix::FeatureMatrix;

#[derive(Clone, Debug)]
pub struct FeatureBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> FeatureBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// [rows, cols] matrix → Tensor<B, 2>
    pub fn matrix(&self, features: &FeatureMatrix) -> Tensor<B, 2> {
        let data = TensorData::new(features.values().to_vec(), features.shape());
        Tensor::from_data(data, &self.device)
    }

    /// Stack per-graph node matrices into [graphs, nodes, cols].
    pub fn nodes(&self, graphs: &[FeatureMatrix]) -> ModelResult<Tensor<B, 3>> {
        let [num_nodes, num_cols] = FeatureMatrix::common_shape(graphs)?;

        let flat: Vec<f32> = graphs
            .iter()
            .flat_map(|g| g.values().iter().copied())
            .collect();

        let data = TensorData::new(flat, [graphs.len(), num_nodes, num_cols]);
        Ok(Tensor::from_data(data, &self.device))
    }

    /// Tensor<B, 2> → one Vec per row.
    pub fn rows(&self, output: Tensor<B, 2>) -> ModelResult<Vec<Vec<f32>>> {
        let [_, num_cols] = output.dims();
        let values = output
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| ModelError::InvalidInput(format!("cannot read output tensor: {e:?}")))?;

        Ok(values.chunks(num_cols.max(1)).map(<[f32]>::to_vec).collect())
    }
}
