use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use parcel_codegen::{Bundle, Composer, DirFileSystem, GenerationConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parcel", about = "Parcel – embed files into Rust source")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Log more detail (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed a file as a resource module
    Embed(EmbedArgs),
}

#[derive(Args)]
struct EmbedArgs {
    /// File to embed
    file: PathBuf,
    /// Resource name (defaults to the file stem)
    #[arg(short, long)]
    name: Option<String>,
    /// Generated module name
    #[arg(short, long)]
    module: Option<String>,
    /// Emit the doc header with a generation timestamp
    #[arg(long)]
    docs: bool,
    /// Crate path exposing the `registry` module
    #[arg(long)]
    registry_crate: Option<String>,
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// JSON config file (parcel.config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Embed(args) => cmd_embed(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_embed(args: &EmbedArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let name = match &args.name {
        Some(name) => name.clone(),
        None => default_bundle_name(&args.file)?,
    };
    tracing::debug!(?config, bundle = %name, "resolved embed settings");

    let body = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;
    let size = body.len();

    let composer = Composer::new(DirFileSystem::new(&args.out_dir), config);
    composer
        .compose(&Bundle::new(name.as_str(), body))
        .with_context(|| format!("Failed to generate resource '{}'", name))?;

    println!(
        "{} Embedded {} ({} bytes) as '{}'",
        "✓".green().bold(),
        args.file.display(),
        size,
        name.bold(),
    );
    println!(
        "  {} {}",
        "→".dimmed(),
        args.out_dir.join(format!("{name}.rs")).display()
    );

    Ok(())
}

/// Start from the config file (or defaults) and apply command-line overrides.
fn resolve_config(args: &EmbedArgs) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => GenerationConfig::default(),
    };

    if let Some(module) = &args.module {
        config.module_name = module.clone();
    }
    if let Some(registry_crate) = &args.registry_crate {
        config.registry_crate = registry_crate.clone();
    }
    if args.docs {
        config.include_docs = true;
    }

    Ok(config)
}

fn default_bundle_name(file: &Path) -> Result<String> {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Cannot derive a resource name from '{}'", file.display()))?;
    Ok(stem.to_string())
}
