// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one CLI action:
//
//   inspect_use_case.rs — build both blocks and report their structure
//   forward_use_case.rs — build a block, feed it features, return logits
//
// Rules for this layer:
//   - No model math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - Picks the Burn backend for the requested device

pub mod inspect_use_case;

pub mod forward_use_case;

use serde::{Deserialize, Serialize};

/// Where tensors live for a use case run.
///
///   Cpu → burn::backend::NdArray
///   Gpu → burn::backend::Wgpu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    #[default]
    Cpu,
    Gpu,
}

pub type CpuBackend = burn::backend::NdArray;
pub type GpuBackend = burn::backend::Wgpu;
