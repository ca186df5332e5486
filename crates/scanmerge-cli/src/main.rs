// Rust guideline compliant 2026-10-16

//! Scanmerge
//!
//! Overwrites the `pos`/`rot_quat` of each scan record with the pose at the
//! same index in a second document, then writes the merged array.

use clap::Parser;
use scanmerge_cli::driver::{run_merge, summary};
use scanmerge_cli::{init_logging, LogOptions};
use scanmerge_core::{Config, FieldPolicy};
use std::path::PathBuf;
use std::process::ExitCode;

/// Merge pose estimates into scan records by position
#[derive(Parser, Debug)]
#[command(name = "scanmerge")]
#[command(
    version,
    about = "Merge pose estimates into scan records by position",
    after_help = "Examples:\n  scanmerge\n  scanmerge api.json new.json -o merged.json\n  scanmerge --require-fields --log-level info\n"
)]
struct Cli {
    /// JSON array of scan records [default: api.json]
    scans: Option<PathBuf>,

    /// JSON object with a `scans` array of poses [default: new.json]
    poses: Option<PathBuf>,

    /// Path to output file [default: merged.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spaces per indentation level in the output [default: 2]
    #[arg(long)]
    indent: Option<usize>,

    /// Fail if a paired scan record lacks `pos` or `rot_quat`
    #[arg(long)]
    require_fields: bool,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Append JSON logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Only print the confirmation line
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(scans) = &self.scans {
            config.scans_path = scans.clone();
        }
        if let Some(poses) = &self.poses {
            config.poses_path = poses.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if self.require_fields {
            config.field_policy = FieldPolicy::Require;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let report = run_merge(&config)?;

    println!("Merged JSON saved as {}", config.output_path.display());
    if !cli.quiet {
        println!("{}", summary(&report));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = LogOptions {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
    };
    let _guard = match init_logging(&options) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
