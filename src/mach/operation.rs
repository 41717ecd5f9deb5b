use super::{Val, TEXT_LIMIT};
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and comparison on runtime values
///
/// Integer with integer stays integer. A real on either side promotes
/// the result to real. Text only concatenates and repeats.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Real(r)) => Ok(Real(l as f64 + r)),
            (Real(l), Integer(r)) => Ok(Real(l + r as f64)),
            (Real(l), Real(r)) => Ok(Real(l + r)),
            (Text(l), Text(r)) => Ok(Text(l + &r)),
            (l, r) => Err(error!(TypeMismatch;
                "cannot add {} and {}", l.type_name(), r.type_name())),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Real(r)) => Ok(Real(l as f64 - r)),
            (Real(l), Integer(r)) => Ok(Real(l - r as f64)),
            (Real(l), Real(r)) => Ok(Real(l - r)),
            (l, r) => Err(error!(TypeMismatch;
                "cannot subtract {} from {}", r.type_name(), l.type_name())),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Real(r)) => Ok(Real(l as f64 * r)),
            (Real(l), Integer(r)) => Ok(Real(l * r as f64)),
            (Real(l), Real(r)) => Ok(Real(l * r)),
            (Text(s), Integer(n)) | (Integer(n), Text(s)) => Operation::repeat(&s, n),
            (l, r) => Err(error!(TypeMismatch;
                "cannot multiply {} by {}", l.type_name(), r.type_name())),
        }
    }

    fn repeat(s: &str, count: i64) -> Result<Val> {
        if count < 0 {
            return Err(error!(IllegalRepeat; "cannot repeat text {} times", count));
        }
        let times = match usize::try_from(count) {
            Ok(times) => times,
            Err(_) => return Err(error!(Overflow; "text repeated {} times is too long", count)),
        };
        if s.is_empty() {
            return Ok(Val::Text(String::new()));
        }
        match s.len().checked_mul(times) {
            Some(len) if len <= TEXT_LIMIT => Ok(Val::Text(s.repeat(times))),
            _ => Err(error!(Overflow; "text repeated {} times is too long", count)),
        }
    }

    /// Integral operands divide with the quotient rounded toward negative
    /// infinity. Any fractional operand makes it an ordinary real division.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        let (l, r) = match (lhs.as_f64(), rhs.as_f64()) {
            (Some(l), Some(r)) => (l, r),
            _ => {
                return Err(error!(TypeMismatch;
                    "cannot divide {} by {}", lhs.type_name(), rhs.type_name()))
            }
        };
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => Operation::floor_divide(*l, *r),
            _ if lhs.is_integral() && rhs.is_integral() => {
                let quotient = (l / r).floor();
                if quotient >= i64::MIN as f64 && quotient < i64::MAX as f64 {
                    Ok(Integer(quotient as i64))
                } else {
                    Err(error!(Overflow))
                }
            }
            _ => Ok(Real(l / r)),
        }
    }

    fn floor_divide(l: i64, r: i64) -> Result<Val> {
        let quotient = match l.checked_div(r) {
            Some(q) => q,
            None => return Err(error!(Overflow)),
        };
        // Truncation already floors unless the signs differ and it was inexact.
        if (l < 0) != (r < 0) && quotient * r != l {
            Ok(Val::Integer(quotient - 1))
        } else {
            Ok(Val::Integer(quotient))
        }
    }

    pub fn compare(lhs: &Val, comparison: Comparison, rhs: &Val) -> Result<bool> {
        use Comparison::*;
        let ordering = Operation::ordering(lhs, rhs)?;
        Ok(match ordering {
            Some(ordering) => match comparison {
                Less => ordering == Ordering::Less,
                LessEqual => ordering != Ordering::Greater,
                Greater => ordering == Ordering::Greater,
                GreaterEqual => ordering != Ordering::Less,
                Equal => ordering == Ordering::Equal,
                NotEqual => ordering != Ordering::Equal,
            },
            None => comparison == NotEqual,
        })
    }

    fn ordering(lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Some(l.cmp(r))),
            (Text(l), Text(r)) => Ok(Some(l.cmp(r))),
            (Text(_), _) | (_, Text(_)) => Err(error!(TypeMismatch;
                "cannot compare {} with {}", lhs.type_name(), rhs.type_name())),
            _ => match (lhs.as_f64(), rhs.as_f64()) {
                (Some(l), Some(r)) => Ok(l.partial_cmp(&r)),
                _ => Err(error!(InternalError; "numeric value without a number")),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    pub fn from_operator(s: &str) -> Option<Comparison> {
        use Comparison::*;
        Some(match s {
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            "=" => Equal,
            "<>" => NotEqual,
            _ => return None,
        })
    }
}
