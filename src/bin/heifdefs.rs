//! heifdefs CLI - generate the Go enum constants of the libheif binding
//!
//! Reads the system libheif headers and writes a single Go source file.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use heifdefs::{GenerateError, GenerationSummary, GeneratorConfig};

#[derive(Parser)]
#[command(name = "heifdefs")]
#[command(version, about = "Generate Go constants from the libheif C headers", long_about = None)]
struct Cli {
    /// Go file to write, e.g. libheif/defines.go
    output: PathBuf,

    /// YAML file overriding header paths and the enum list
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to heif.h (overrides the config file)
    #[arg(long)]
    header: Option<PathBuf>,

    /// Path to heif_version.h (overrides the config file)
    #[arg(long)]
    version_header: Option<PathBuf>,

    /// Log every located enum
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<GenerationSummary, GenerateError> {
    let mut config = match cli.config {
        Some(ref path) => GeneratorConfig::load_from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(header) = cli.header {
        config.header = header;
    }
    if let Some(version_header) = cli.version_header {
        config.version_header = version_header;
    }
    config.validate()?;

    println!("📋 Reading {}...", config.header.display());
    let summary = heifdefs::generate_file(&config, &cli.output)?;
    println!("  ✓ Generated {}", cli.output.display());

    Ok(summary)
}

fn print_summary(summary: &GenerationSummary) {
    println!("  ℹ build_version = {}", summary.build_version);
    for declaration in &summary.declarations {
        println!(
            "  ✓ {} ({} constants)",
            declaration.type_name, declaration.constant_count
        );
    }
    println!("✨ Generated {} constants", summary.constant_count());
}
