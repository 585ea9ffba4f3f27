//! worldbook: convert region and location notes into world book JSON.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use worldbook::formats::OutputFormat;
use worldbook::{config, input, parser, Error};

#[derive(Parser)]
#[command(name = "worldbook")]
#[command(about = "Convert region and location notes into world book JSON", long_about = None)]
struct Args {
    /// Notes to convert; reads stdin when omitted or `-`
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output format (overrides worldbook.toml)
    #[arg(long, short = 'f', value_enum)]
    format: Option<OutputFormat>,

    /// Write to this file or directory instead of stdout
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log skipped sections and other parser decisions
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("worldbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let cfg = config::Config::load();

    // Override config with command line args
    let format = args.format.unwrap_or(cfg.format);
    let pretty = cfg.pretty && !args.compact;
    let formatter = format.formatter(pretty);

    let text = input::read_source(args.path.as_deref())?;
    let document = parser::parse(&text)?;
    debug!(
        entries = document.len(),
        regions = document.regions().count(),
        format = formatter.name(),
        "parsed document"
    );

    let rendered = formatter.render(&document)?;
    let output = args
        .output
        .as_deref()
        .map(|path| input::output_path(path, formatter.as_ref()));
    input::write_output(output.as_deref(), &rendered)?;
    Ok(())
}
