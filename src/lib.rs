//! # Grin
//!
//! A small line-oriented language: one statement per line, dynamically
//! typed variables, and jumps by line offset or by label.
//!
//! Run a program from a file with `grin program.grin`, or type it in and
//! finish with a line holding a single `.`.
//! ```text
//! LET name "World"
//! PRINT name
//! .
//! ```
//!
//! The [`lang`] module turns source text into statements. The [`mach`]
//! module executes them.
//!
//! ```
//! use grin::mach::{Program, Runtime};
//!
//! let program = Program::from_source("LET x 7\nDIV x 2\nPRINT x\n.").unwrap();
//! let mut output = Vec::new();
//! Runtime::new(program).run(&b""[..], &mut output).unwrap();
//! assert_eq!(output, b"3\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
