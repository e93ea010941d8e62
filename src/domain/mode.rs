// ============================================================
// Layer 3 — Execution Mode
// ============================================================
// Normalization and dropout behave differently while training.
// The mode is passed into every forward call explicitly.

use serde::{Deserialize, Serialize};

/// Which statistics and regularization a forward pass uses.
///
/// | Mode    | BatchNorm                                 | Dropout            |
/// |---------|-------------------------------------------|--------------------|
/// | `Train` | batch statistics, running buffers updated | random zeroing     |
/// | `Eval`  | running statistics, buffers untouched     | identity           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Train,
    #[default]
    Eval,
}

impl Mode {
    pub fn is_train(self) -> bool {
        matches!(self, Mode::Train)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Train => f.write_str("train"),
            Mode::Eval  => f.write_str("eval"),
        }
    }
}
