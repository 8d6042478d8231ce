use anyhow::{Context, Result};
use bestiary_core::{init_logging, BestiaryConfig};
use bestiary_lib::app::{self, Target};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "bestiary.toml")]
    config: String,

    /// Override the seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write outputs here instead of the configured directory
    #[arg(short, long)]
    output: Option<String>,

    /// Log every built chain and taxonomy seed
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Batch of three-stage creature chains
    Chains,
    /// Branching taxonomy graph
    Taxonomy,
    /// Predator/prey web for one region
    FoodWeb,
    /// Region map of the island
    Island,
    /// Everything above, from one seed
    All,
}

impl From<Command> for Target {
    fn from(command: Command) -> Self {
        match command {
            Command::Chains => Target::Chains,
            Command::Taxonomy => Target::Taxonomy,
            Command::FoodWeb => Target::FoodWeb,
            Command::Island => Target::Island,
            Command::All => Target::All,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });

    let mut config = BestiaryConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(output) = args.output {
        config.data.output_dir = output.into();
    }

    let summary = app::run(config, args.command.into())?;
    println!(
        "Generated {} creatures ({} edges) with seed {}",
        summary.creatures, summary.edges, summary.seed
    );
    for file in &summary.files {
        println!("  {}", file.display());
    }
    Ok(())
}
