// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The application layer asks for feature data through this trait
// and never cares whether it came from disk or from a seeded RNG.
//
// Implementations:
//   - JsonMatrixLoader → reads [[f32]] / [[[f32]]] JSON files
//   - SyntheticSource  → draws uniform values from a seeded RNG

use anyhow::Result;
use crate::domain::feature_matrix::FeatureMatrix;

// ─── FeatureSource ───────────────────────────────────────────────────────────
/// Anything that can produce feature data for a forward pass.
pub trait FeatureSource {
    /// One matrix of per-sample feature rows, `[batch, cols]`.
    fn load_matrix(&self) -> Result<FeatureMatrix>;

    /// A batch of per-graph node matrices, each `[nodes, cols]`.
    /// Every matrix in the batch must have the same shape.
    fn load_node_batch(&self) -> Result<Vec<FeatureMatrix>>;
}
