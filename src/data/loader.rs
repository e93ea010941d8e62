// ============================================================
// Layer 4 — JSON Feature Loader
// ============================================================
// Reads feature data from JSON files on disk.
//
//   matrix file:     [[f32, ...], ...]          → [rows, cols]
//   node batch file: [[[f32, ...], ...], ...]   → graphs × [nodes, cols]
//
// Shape checks are delegated to FeatureMatrix so ragged rows
// fail with the same error everywhere.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::feature_matrix::FeatureMatrix;
use crate::domain::traits::FeatureSource;

pub struct JsonMatrixLoader {
    path: PathBuf,
}

impl JsonMatrixLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read features from '{}'", self.path.display()))
    }
}

impl FeatureSource for JsonMatrixLoader {
    fn load_matrix(&self) -> Result<FeatureMatrix> {
        let rows: Vec<Vec<f32>> = serde_json::from_str(&self.read()?)
            .with_context(|| format!("'{}' is not a [[f32]] matrix", self.path.display()))?;

        let matrix = FeatureMatrix::from_rows(rows)?;
        tracing::info!(
            "Loaded {}x{} feature matrix from '{}'",
            matrix.rows(), matrix.cols(), self.path.display()
        );
        Ok(matrix)
    }

    fn load_node_batch(&self) -> Result<Vec<FeatureMatrix>> {
        let graphs: Vec<Vec<Vec<f32>>> = serde_json::from_str(&self.read()?)
            .with_context(|| format!("'{}' is not a [[[f32]]] node batch", self.path.display()))?;

        let batch = graphs
            .into_iter()
            .map(FeatureMatrix::from_rows)
            .collect::<Result<Vec<_>, _>>()?;
        let [nodes, cols] = FeatureMatrix::common_shape(&batch)?;

        tracing::info!(
            "Loaded {} graphs of {}x{} node features from '{}'",
            batch.len(), nodes, cols, self.path.display()
        );
        Ok(batch)
    }
}
