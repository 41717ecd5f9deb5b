use grin::error;
use grin::lang::Error;
use grin::mach::{Program, Runtime};
use ansi_term::Style;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

type Result<T> = std::result::Result<T, Error>;

pub struct Options {
    pub file: Option<PathBuf>,
    pub loop_limit: usize,
    pub cycles: usize,
}

/// Load, run, and report. Returns the process exit status.
pub fn main(options: Options) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    // Input waits block until a line arrives, so the flag is only seen
    // after that. A second CTRL-C before then ends the process.
    if let Err(error) = ctrlc::set_handler(move || {
        if int_moved.swap(true, Ordering::SeqCst) {
            eprintln!("{}", Style::new().bold().paint("BREAK"));
            process::exit(130);
        }
    }) {
        warn!(%error, "CTRL-C will not interrupt programs");
    }
    match main_loop(options, interrupted) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

fn main_loop(options: Options, interrupted: Arc<AtomicBool>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let source = match &options.file {
        Some(path) => load(path)?,
        None => read_program(&mut input)?,
    };
    let program = Program::from_source(&source)?;
    info!(
        statements = program.len(),
        labels = program.labels().len(),
        "program loaded"
    );
    let mut runtime = Runtime::new(program);
    runtime.set_loop_limit(options.loop_limit);

    let stdout = io::stdout();
    runtime.run_until(&mut input, stdout.lock(), options.cycles, || {
        interrupted.swap(false, Ordering::SeqCst)
    })?;
    info!("program finished");
    Ok(())
}

/// Source typed at the terminal ends at the `.` line or end of input.
/// Anything after the `.` is left for the program's own input statements.
fn read_program<R: BufRead>(input: &mut R) -> Result<String> {
    let mut source = String::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let done = line.trim() == ".";
        source.push_str(&line);
        if done {
            break;
        }
    }
    Ok(source)
}

fn load(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(e) => Err(error!(IoError; "{}: {}", path.display(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_program_stops_at_dot() {
        let mut input = io::Cursor::new("LET x 1\n .\n5\n");
        let source = read_program(&mut input).unwrap();
        assert_eq!(source, "LET x 1\n .\n");
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "5\n");
    }
}
