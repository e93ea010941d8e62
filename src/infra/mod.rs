// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   config_store.rs — saves and loads GraphMlpConfig as JSON so a
//                     caller can rebuild identical blocks later
//
// Model weights are not persisted here; the outer pipeline owns
// checkpointing.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Model configuration persistence
pub mod config_store;
