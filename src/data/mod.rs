// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw feature values and Burn tensors:
//
//   JSON file / seeded RNG
//       │
//       ▼
//   JsonMatrixLoader | SyntheticSource   → FeatureMatrix
//       │
//       ▼
//   FeatureBatcher                       → Tensor<B, 2> / Tensor<B, 3>
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads feature matrices and node batches from JSON
pub mod loader;

/// Seeded random features for probing
pub mod synthetic;

/// FeatureMatrix ↔ tensor conversion
pub mod batcher;
