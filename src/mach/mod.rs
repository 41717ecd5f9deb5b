/*!
## Rust Machine Module

This Rust module is the execution engine for Grin. It owns the program
counter, variables, call stack, and the runaway-loop guard.

*/

pub type Address = usize;

/// Times a single line may be entered before the run is abandoned.
pub const LOOP_LIMIT: usize = 1000;
/// Deepest `GOSUB` nesting.
pub const CALL_STACK_LIMIT: usize = u16::max_value() as usize;
/// Longest text, in bytes, that repeating may produce.
pub const TEXT_LIMIT: usize = 1 << 24;
/// Statements executed per call to `Runtime::execute` by the drivers.
pub const CYCLES: usize = 5000;

mod labels;
mod operation;
mod program;
mod runtime;
mod stack;
mod target;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use labels::Labels;
pub use operation::{Comparison, Operation};
pub use program::Program;
pub use runtime::{Event, InputKind, Runtime};
pub use stack::Stack;
pub use target::resolve;
pub use val::{unquote, Operand, Val};
pub use var::Var;
