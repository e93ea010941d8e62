// ============================================================
// Layer 4 — Synthetic Feature Source
// ============================================================
// Generates uniform features in [-1, 1) from a seeded StdRng so a
// forward pass can be run without any data on disk.
// The same seed always produces the same matrices.

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::feature_matrix::FeatureMatrix;
use crate::domain::traits::FeatureSource;

pub struct SyntheticSource {
    /// Rows of a matrix, or graphs of a node batch.
    batch_size: usize,
    /// Node count per graph (node batches only).
    num_nodes:  usize,
    num_cols:   usize,
    seed:       u64,
}

impl SyntheticSource {
    pub fn new(batch_size: usize, num_nodes: usize, num_cols: usize, seed: u64) -> Self {
        Self { batch_size, num_nodes, num_cols, seed }
    }

    fn draw(rng: &mut StdRng, rows: usize, cols: usize) -> Result<FeatureMatrix> {
        let values = (0..rows * cols).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
        Ok(FeatureMatrix::new(rows, cols, values)?)
    }
}

impl FeatureSource for SyntheticSource {
    fn load_matrix(&self) -> Result<FeatureMatrix> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        tracing::debug!("Generating {}x{} features (seed {})", self.batch_size, self.num_cols, self.seed);
        Self::draw(&mut rng, self.batch_size, self.num_cols)
    }

    fn load_node_batch(&self) -> Result<Vec<FeatureMatrix>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        tracing::debug!(
            "Generating {} graphs of {}x{} node features (seed {})",
            self.batch_size, self.num_nodes, self.num_cols, self.seed
        );
        (0..self.batch_size)
            .map(|_| Self::draw(&mut rng, self.num_nodes, self.num_cols))
            .collect()
    }
}
