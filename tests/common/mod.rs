#![allow(dead_code)]
use grin::mach::{Event, Program, Runtime};

pub fn runtime(source: &str) -> Runtime {
    match Program::from_source(source) {
        Ok(program) => Runtime::new(program),
        Err(e) => panic!("{}", e),
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(_) => {
                s.push_str("? ");
                break;
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Run to completion over in-memory line I/O.
pub fn run_with_input(source: &str, input: &str) -> String {
    let mut r = runtime(source);
    let mut output = Vec::new();
    if let Err(error) = r.run(input.as_bytes(), &mut output) {
        output.extend_from_slice(format!("{}\n", error).as_bytes());
    }
    String::from_utf8_lossy(&output).into_owned()
}
