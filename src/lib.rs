//! MLP building blocks for GIN-style graph networks, on Burn.
//!
//! - [`ml::feature_mlp::FeatureMlp`]: 1..N affine layers with BatchNorm + ReLU
//!   between hidden layers.
//! - [`ml::classifier::OutputClassifier`]: scalar readout followed by
//!   BatchNorm → ReLU → Dropout → Linear class logits.
//!
//! Every forward call takes an explicit [`domain::mode::Mode`].

#![recursion_limit = "256"]

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;

pub use domain::{error::ModelError, mode::Mode};
pub use ml::{
    classifier::{OutputClassifier, OutputClassifierConfig},
    feature_mlp::{FeatureMlp, FeatureMlpConfig},
    GraphMlpConfig,
};
