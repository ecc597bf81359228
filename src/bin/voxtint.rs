//! voxtint - apply color scripts to MagicaVoxel models
//!
//! ```bash
//! voxtint list
//! voxtint run -i terrain.vox -o out.vox --script "Darken (by 10)" --script "Remove dead voxels"
//! voxtint run -i terrain.vox -o out.vox --recipe grade.json
//! voxtint preview -i out.vox -o out.png
//! ```

use voxtint::{load_vox, save_vox, Recipe, ScriptRegistry};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voxtint")]
#[command(about = "Color transforms and dead-voxel cleanup for .vox models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the names of the built-in scripts
    List,

    /// Apply scripts and/or a recipe to a model and write the result
    Run(RunArgs),

    /// Write a top-down PNG of a model
    #[cfg(feature = "img")]
    Preview(PreviewArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Input .vox file
    #[arg(short, long)]
    input: PathBuf,

    /// Output .vox file
    #[arg(short, long)]
    output: PathBuf,

    /// Script to apply, by name. Repeat to apply several in order.
    #[arg(short, long = "script")]
    scripts: Vec<String>,

    /// JSON recipe applied after any --script
    #[arg(short, long)]
    recipe: Option<PathBuf>,

    /// Model to read from the input file
    #[arg(short, long, default_value_t = 0)]
    model: usize,
}

#[cfg(feature = "img")]
#[derive(Args)]
struct PreviewArgs {
    /// Input .vox file
    #[arg(short, long)]
    input: PathBuf,

    /// Output image file
    #[arg(short, long)]
    output: PathBuf,

    /// Model to read from the input file
    #[arg(short, long, default_value_t = 0)]
    model: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for name in ScriptRegistry::builtin().names() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Run(args) => run(args),
        #[cfg(feature = "img")]
        Commands::Preview(args) => preview(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    if args.scripts.is_empty() && args.recipe.is_none() {
        bail!("nothing to do, pass --script or --recipe");
    }

    let registry = ScriptRegistry::builtin();
    for script in args.scripts.iter() {
        if !registry.contains(script) {
            bail!("unknown script {:?}, see `voxtint list`", script);
        }
    }
    let recipe = match &args.recipe {
        Some(path) => {
            let recipe = Recipe::from_path(path)
                .with_context(|| format!("Failed to read recipe {}", path.display()))?;
            recipe
                .validate(&registry)
                .with_context(|| format!("Invalid recipe {}", path.display()))?;
            Some(recipe)
        }
        None => None,
    };

    let mut volume = load_vox(&args.input, args.model)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    for script in args.scripts.iter() {
        registry.execute(script, &mut volume)?;
    }
    if let Some(recipe) = recipe {
        let reports = recipe.apply(&registry, &mut volume)?;
        info!("recipe ran {} steps", reports.len());
    }

    save_vox(&volume, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))
}

#[cfg(feature = "img")]
fn preview(args: PreviewArgs) -> Result<()> {
    let volume = voxtint::load_vox(&args.input, args.model)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    voxtint::save_preview(&volume, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
