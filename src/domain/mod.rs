// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types shared by every other layer:
//
//   mode.rs           — Train / Eval switch threaded through forwards
//   error.rs          — typed errors for configuration and input checks
//   feature_matrix.rs — a validated dense feature matrix
//   traits.rs         — sources of feature matrices
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits

pub mod mode;

pub mod error;

pub mod feature_matrix;

pub mod traits;
