// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `inspect`, `forward`, `init-config`
// and their flags. clap-only enums are converted into the
// application types here, so Layer 2 never sees clap.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::{
    forward_use_case::{BlockKind, ForwardConfig},
    DeviceKind,
};
use crate::domain::mode::Mode;
use crate::infra::config_store::read_config;
use crate::ml::{classifier::OutputClassifierConfig, feature_mlp::FeatureMlpConfig, GraphMlpConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build both blocks and print their layer and parameter counts
    Inspect(InspectArgs),

    /// Run one forward pass of a block and print the output
    Forward(ForwardArgs),

    /// Write the model configuration to a JSON file
    InitConfig(InitConfigArgs),
}

// ─── Model dimensions ─────────────────────────────────────────────────────────
/// Shared by every subcommand. `--config` wins over the dimension flags.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// JSON model config written by `init-config`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Affine layers in the feature MLP (1 = linear model)
    #[arg(long, default_value_t = 2)]
    pub num_layers: usize,

    /// Width of each input feature vector
    #[arg(long, default_value_t = 16)]
    pub input_dim: usize,

    /// Width of every hidden layer, shared with the classifier
    #[arg(long, default_value_t = 32)]
    pub hidden_dim: usize,

    /// Width of the feature MLP output
    #[arg(long, default_value_t = 32)]
    pub output_dim: usize,

    /// Number of classes predicted by the classifier
    #[arg(long, default_value_t = 2)]
    pub num_classes: usize,

    /// Classifier dropout rate, within [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,
}

impl ModelArgs {
    pub fn resolve(&self) -> Result<GraphMlpConfig> {
        if let Some(path) = &self.config {
            tracing::info!("Using model config '{}'", path.display());
            return read_config(path);
        }
        Ok(GraphMlpConfig::new(
            FeatureMlpConfig::new(self.num_layers, self.input_dim, self.hidden_dim, self.output_dim),
            OutputClassifierConfig::new(self.hidden_dim, self.num_classes, self.dropout),
        ))
    }
}

// ─── Value enums ──────────────────────────────────────────────────────────────
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Train,
    Eval,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Train => Mode::Train,
            ModeArg::Eval  => Mode::Eval,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DeviceArg {
    /// NdArray backend
    Cpu,
    /// Wgpu backend
    Gpu,
}

impl From<DeviceArg> for DeviceKind {
    fn from(d: DeviceArg) -> Self {
        match d {
            DeviceArg::Cpu => DeviceKind::Cpu,
            DeviceArg::Gpu => DeviceKind::Gpu,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum BlockArg {
    Mlp,
    Classifier,
}

impl From<BlockArg> for BlockKind {
    fn from(b: BlockArg) -> Self {
        match b {
            BlockArg::Mlp        => BlockKind::Mlp,
            BlockArg::Classifier => BlockKind::Classifier,
        }
    }
}

// ─── Subcommand arguments ─────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[arg(long, value_enum, default_value_t = DeviceArg::Cpu)]
    pub device: DeviceArg,
}

#[derive(Args, Debug)]
pub struct ForwardArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Which block to run
    #[arg(long, value_enum, default_value_t = BlockArg::Mlp)]
    pub block: BlockArg,

    /// Train: batch statistics and active dropout. Eval: running statistics, no dropout.
    #[arg(long, value_enum, default_value_t = ModeArg::Eval)]
    pub mode: ModeArg,

    #[arg(long, value_enum, default_value_t = DeviceArg::Cpu)]
    pub device: DeviceArg,

    /// JSON features: [[f32]] for the MLP, [[[f32]]] for the classifier.
    /// Random features are generated when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Rows (MLP) or graphs (classifier) of generated features
    #[arg(long, default_value_t = 4)]
    pub batch_size: usize,

    /// Seed for generated features, initial weights and dropout masks
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl From<&ForwardArgs> for ForwardConfig {
    fn from(a: &ForwardArgs) -> Self {
        ForwardConfig {
            block:      a.block.into(),
            mode:       a.mode.into(),
            device:     a.device.into(),
            input:      a.input.clone(),
            batch_size: a.batch_size,
            seed:       a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Directory to write graph_mlp_config.json into
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}
