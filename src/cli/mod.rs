// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results.
// All work is delegated to Layer 2 (application).
//
//   inspect     — layer and parameter counts of both blocks
//   forward     — one forward pass, printed row by row
//   init-config — write the model config JSON

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ForwardArgs, InitConfigArgs, InspectArgs};

#[derive(Parser, Debug)]
#[command(
    name = "graph-mlp",
    version,
    about = "Build and run the MLP feature transformer and output classifier blocks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args)    => run_inspect(args),
            Commands::Forward(args)    => run_forward(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let model  = args.model.resolve()?;
    let report = InspectUseCase::new(model, args.device.into()).execute()?;

    let kind = if report.feature_linear { "linear" } else { "multi-layer" };
    println!("FeatureMlp ({kind})");
    println!("  affine layers:  {}", report.feature_layers);
    println!("  norm layers:    {}", report.feature_norms);
    println!("  parameters:     {}", report.feature_params);
    println!("OutputClassifier");
    println!("  classes:        {}", report.num_classes);
    println!("  parameters:     {}", report.classifier_params);
    Ok(())
}

fn run_forward(args: ForwardArgs) -> Result<()> {
    use crate::application::forward_use_case::ForwardUseCase;

    let model  = args.model.resolve()?;
    let report = ForwardUseCase::new(model, (&args).into()).execute()?;

    println!("{:?} output {:?} ({} mode)", report.block, report.shape, report.mode);
    for (i, row) in report.rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>9.4}")).collect();
        println!("{i:>4}: {}", cells.join(" "));
    }
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    use crate::infra::config_store::ConfigStore;

    let model = args.model.resolve()?;
    // Refuse to persist a config the blocks cannot be built from.
    model.feature.validate()?;
    model.classifier.validate()?;

    let path = ConfigStore::new(&args.out).save(&model)?;
    println!("Config written to {}", path.display());
    Ok(())
}
