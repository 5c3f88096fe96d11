use std::io::{self, Write};
use std::path::PathBuf;

use aws_model_sync::layout::DEFAULT_MODELS_DIR;
use aws_model_sync::sync::{self, SyncOptions};
use aws_model_sync::{Result, SyncError};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

const USAGE_HINT: &str =
    "Please provide the location of the aws-models repository as the first argument";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                println!("{USAGE_HINT}");
                println!("{}", Cli::command().render_usage());
                std::process::exit(1);
            }
        },
    };

    if let Err(error) = init_tracing().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = SyncOptions {
        models_dir: cli.models_dir,
        dry_run: cli.dry_run,
    };

    let mut stdout = io::stdout().lock();

    if cli.json {
        let report = sync::sync_models(&cli.repo_path, &options, &mut io::sink())?;
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        sync::sync_models(&cli.repo_path, &options, &mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| SyncError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    name = "aws-model-sync",
    author,
    version,
    about = "Refresh the local aws-models directory from an aws-models checkout."
)]
struct Cli {
    /// Root of the aws-models repository checkout.
    repo_path: PathBuf,

    /// Directory holding the local `*.json` models.
    #[arg(long, default_value = DEFAULT_MODELS_DIR)]
    models_dir: PathBuf,

    /// Report what would be copied without touching any file.
    #[arg(long)]
    dry_run: bool,

    /// Print the sync report as JSON instead of per-model diagnostics.
    #[arg(long)]
    json: bool,
}
