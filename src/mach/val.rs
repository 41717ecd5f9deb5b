use super::Var;

/// ## Runtime values
///
/// Grin variables are dynamically typed. A variable holds whichever of
/// these it was last assigned and may change type at any time.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Default for Val {
    fn default() -> Self {
        Val::Integer(0)
    }
}

impl Val {
    /// Decode literal text. Digits alone are an integer, a decimal number
    /// is a real, and quoted text is text. Anything else is not a literal.
    pub fn from_literal(s: &str) -> Option<Val> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(i) = s.parse::<i64>() {
                return Some(Val::Integer(i));
            }
        }
        if is_decimal(s) {
            if let Ok(r) = s.parse::<f64>() {
                return Some(Val::Real(r));
            }
        }
        unquote(s).map(|t| Val::Text(t.to_string()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Val::Integer(_) | Val::Real(_))
    }

    /// Numeric value widened to a real.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Val::Integer(i) => Some(*i as f64),
            Val::Real(r) => Some(*r),
            Val::Text(_) => None,
        }
    }

    /// True for integers and for reals without a fractional part.
    pub fn is_integral(&self) -> bool {
        match self {
            Val::Integer(_) => true,
            Val::Real(r) => r.is_finite() && r.fract() == 0.0,
            Val::Text(_) => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "integer",
            Val::Real(_) => "real",
            Val::Text(_) => "text",
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Real(n) => write!(f, "{}", format_real(*n)),
            Text(s) => write!(f, "{}", s),
        }
    }
}

/// Shortest round-trip form. Integral reals keep a trailing `.0`; below
/// 1e-4 and from 1e16 up the exponent is signed and at least two digits,
/// so `1e20` reads `1e+20` and `0.00001` reads `1e-05`.
fn format_real(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    let s = format!("{:?}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

/// Anything that can be turned into a value at execution time.
pub trait Operand {
    fn evaluate(&self, var: &Var) -> Val;
}

impl Operand for Val {
    fn evaluate(&self, _var: &Var) -> Val {
        self.clone()
    }
}

impl Operand for str {
    fn evaluate(&self, var: &Var) -> Val {
        match Val::from_literal(self) {
            Some(val) => val,
            None => var.fetch(self),
        }
    }
}

impl Operand for String {
    fn evaluate(&self, var: &Var) -> Val {
        self.as_str().evaluate(var)
    }
}

/// Strip a matching pair of `"` or `'` delimiters.
pub fn unquote(s: &str) -> Option<&str> {
    if s.len() < 2 {
        return None;
    }
    for quote in &['"', '\''] {
        if s.starts_with(*quote) && s.ends_with(*quote) {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}

fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').or_else(|| s.strip_prefix('+')).unwrap_or(s);
    let mut seen_digit = false;
    let mut seen_point = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(Val::from_literal("42"), Some(Val::Integer(42)));
        assert_eq!(Val::from_literal("-7"), Some(Val::Real(-7.0)));
        assert_eq!(Val::from_literal("2.5"), Some(Val::Real(2.5)));
        assert_eq!(Val::from_literal("\"hi\""), Some(Val::Text("hi".into())));
        assert_eq!(Val::from_literal("'hi'"), Some(Val::Text("hi".into())));
        assert_eq!(Val::from_literal("\"\""), Some(Val::Text("".into())));
        assert_eq!(Val::from_literal("x"), None);
        assert_eq!(Val::from_literal("inf"), None);
        assert_eq!(Val::from_literal("\"mismatch'"), None);
    }

    #[test]
    fn test_huge_digits_become_real() {
        assert_eq!(
            Val::from_literal("99999999999999999999"),
            Some(Val::Real(1e20))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Integer(-4).to_string(), "-4");
        assert_eq!(Val::Real(3.0).to_string(), "3.0");
        assert_eq!(Val::Real(2.5).to_string(), "2.5");
        assert_eq!(Val::Real(-7.0).to_string(), "-7.0");
        assert_eq!(Val::Real(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Val::Real(1e16).to_string(), "1e+16");
        assert_eq!(Val::Real(1e20).to_string(), "1e+20");
        assert_eq!(Val::Real(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Val::Real(0.0001).to_string(), "0.0001");
        assert_eq!(Val::Real(0.00001).to_string(), "1e-05");
        assert_eq!(Val::Real(2.5e-123).to_string(), "2.5e-123");
        assert_eq!(Val::Real(f64::INFINITY).to_string(), "inf");
        assert_eq!(Val::Real(f64::NAN).to_string(), "nan");
        assert_eq!(Val::Text("abc".into()).to_string(), "abc");
    }

    #[test]
    fn test_evaluate() {
        let mut var = Var::new();
        var.store("x", Val::Text("boo".into()));
        assert_eq!("x".evaluate(&var), Val::Text("boo".into()));
        assert_eq!("unset".evaluate(&var), Val::Integer(0));
        assert_eq!("8".evaluate(&var), Val::Integer(8));
        assert_eq!(Val::Real(1.5).evaluate(&var), Val::Real(1.5));
    }

    #[test]
    fn test_integral() {
        assert!(Val::Integer(3).is_integral());
        assert!(Val::Real(-4.0).is_integral());
        assert!(!Val::Real(0.5).is_integral());
        assert!(!Val::Text("3".into()).is_integral());
    }
}
