// ============================================================
// Layer 3 — FeatureMatrix Domain Type
// ============================================================
// A dense row-major matrix of f32 features.
// The shape is checked once here so the tensor layer can trust it.

use serde::{Deserialize, Serialize};

use crate::domain::error::{ModelError, ModelResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    rows:   usize,
    cols:   usize,
    values: Vec<f32>,
}

impl FeatureMatrix {
    /// Build from a flat row-major buffer.
    pub fn new(rows: usize, cols: usize, values: Vec<f32>) -> ModelResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ModelError::InvalidInput(format!(
                "feature matrix must be non-empty, got {rows}x{cols}"
            )));
        }
        if values.len() != rows * cols {
            return Err(ModelError::InvalidInput(format!(
                "expected {} values for a {rows}x{cols} matrix, got {}",
                rows * cols,
                values.len()
            )));
        }
        Ok(Self { rows, cols, values })
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> ModelResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(ModelError::InvalidInput(format!(
                "row {idx} has {} values, expected {n_cols}",
                row.len()
            )));
        }

        let values = rows.into_iter().flatten().collect();
        Self::new(n_rows, n_cols, values)
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }

    pub fn shape(&self) -> [usize; 2] { [self.rows, self.cols] }

    pub fn values(&self) -> &[f32] { &self.values }

    pub fn into_values(self) -> Vec<f32> { self.values }

    /// Borrow one row.
    pub fn row(&self, idx: usize) -> Option<&[f32]> {
        if idx >= self.rows {
            return None;
        }
        let start = idx * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Check that every matrix of a node batch has one shared shape.
    pub fn common_shape(batch: &[FeatureMatrix]) -> ModelResult<[usize; 2]> {
        let first = batch
            .first()
            .ok_or_else(|| ModelError::InvalidInput("node batch is empty".to_string()))?
            .shape();

        match batch.iter().position(|m| m.shape() != first) {
            Some(idx) => Err(ModelError::InvalidInput(format!(
                "graph {idx} has shape {:?}, expected {:?}",
                batch[idx].shape(),
                first
            ))),
            None => Ok(first),
        }
    }
}
