use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use wikipages::config::{
    ExtractConfig, ReadMode, DEFAULT_MAX_FILENAME_LENGTH, DEFAULT_REPLACEMENT,
};
use wikipages::progress::BarProgress;
use wikipages::Pipeline;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "wikipages")]
#[command(about = "Extract the XML of each page from a Wikipedia dump into its own file")]
struct Cli {
    /// Path to the Wikipedia dump file (.xml.bz2)
    src: PathBuf,

    /// Output directory for page files (created if missing)
    dest: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Scan the dump as a stream instead of decompressing it into memory
    #[arg(long)]
    streaming: bool,

    /// Write pages in parallel
    #[arg(long)]
    parallel: bool,

    /// Maximum filename length in characters
    #[arg(long, default_value_t = DEFAULT_MAX_FILENAME_LENGTH)]
    max_filename_length: usize,

    /// Replacement for characters not allowed in filenames
    #[arg(long, default_value = DEFAULT_REPLACEMENT)]
    replacement: String,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn run(cli: Cli) -> Result<()> {
    if !cli.src.exists() {
        bail!("Dump file does not exist: {}", cli.src.display());
    }

    let config = ExtractConfig {
        replacement: cli.replacement,
        max_filename_length: cli.max_filename_length,
        mode: if cli.streaming {
            ReadMode::Streaming
        } else {
            ReadMode::Buffered
        },
        parallel: cli.parallel,
    };

    info!(src = %cli.src.display(), "Extracting pages, this may take a while");
    let mut pipeline = Pipeline::new(&cli.dest).with_config(config);
    if !cli.no_progress {
        pipeline = pipeline.with_observer(BarProgress::new());
    }

    let summary = pipeline
        .run(&cli.src)
        .with_context(|| format!("Failed to extract pages from {}", cli.src.display()))?;

    println!(
        "Done! Wrote {} out of {} to {}.",
        summary.records_written,
        summary.total_records_found,
        cli.dest.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(cli) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
