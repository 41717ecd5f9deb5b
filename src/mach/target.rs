use super::{unquote, Address, Labels, Val, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Jump target resolution
///
/// Shared by `GOTO` and `GOSUB`. A target is one of:
///
/// * an integer, taken as an offset from the jumping line,
/// * a quoted label,
/// * a variable holding either of the above.
///
/// An offset landing exactly one past the last line halts the program.

pub fn resolve(
    token: &str,
    pc: Address,
    len: usize,
    labels: &Labels,
    var: &Var,
) -> Result<Address> {
    if let Ok(offset) = token.parse::<i64>() {
        return offset_from(pc, offset, len);
    }
    if let Some(label) = unquote(token) {
        return labels.resolve(label);
    }
    match var.get(token) {
        None => Err(error!(UndefinedVariable; "jump target '{}' is not set", token)),
        Some(Val::Integer(offset)) => offset_from(pc, *offset, len),
        Some(Val::Text(s)) => labels.resolve(unquote(s).unwrap_or(s.as_str())),
        Some(other) => Err(error!(TypeMismatch;
            "jump target '{}' holds a {}", token, other.type_name())),
    }
}

fn offset_from(pc: Address, offset: i64, len: usize) -> Result<Address> {
    let dest = (pc as i64).checked_add(offset);
    match dest {
        Some(dest) if dest >= 0 && dest as u64 <= len as u64 => Ok(dest as Address),
        _ => Err(error!(LineOutOfRange;
            "offset {} from line {} leaves the program", offset, pc + 1)),
    }
}
