//! # Grin
//!
//! Runs a Grin program from a file, or from standard input up to the
//! line holding a single `.`.
//!

use clap::Parser;
use grin::mach::{CYCLES, LOOP_LIMIT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod term;

#[derive(Parser)]
#[command(name = "grin")]
#[command(about = "Interpreter for the Grin teaching language")]
struct Args {
    /// Program file; read from standard input when omitted
    file: Option<PathBuf>,

    /// Times a single line may be entered before the run is abandoned
    #[arg(long, default_value_t = LOOP_LIMIT)]
    loop_limit: usize,

    /// Statements executed between checks for CTRL-C
    #[arg(long, default_value_t = CYCLES)]
    cycles: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let status = term::main(term::Options {
        file: args.file,
        loop_limit: args.loop_limit,
        cycles: args.cycles.max(1),
    });
    std::process::exit(status);
}
