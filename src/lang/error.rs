use super::LineNumber;

/// ## Fatal errors
///
/// Every error is fatal to a running program. An error carries its code,
/// the index of the statement that raised it (when known), and an
/// optional detail message.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(&format!($($msg)+))
    };
    ($err:ident, $line:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message(&format!($($msg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    /// Attach a statement index. An index already present wins, so the
    /// innermost location survives as errors bubble outward.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    IllegalRepeat = 5,
    Overflow = 6,
    LineOutOfRange = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    Break = 17,
    InternalError = 51,
    IoError = 57,
    InputPastEnd = 62,
    UndefinedLabel = 70,
    UndefinedVariable = 71,
    DuplicateLabel = 72,
    InvalidInput = 73,
    InvalidCondition = 74,
    InfiniteLoop = 75,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            IllegalRepeat => "ILLEGAL REPEAT",
            Overflow => "OVERFLOW",
            LineOutOfRange => "LINE OUT OF RANGE",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
            IoError => "I/O ERROR",
            InputPastEnd => "INPUT PAST END",
            UndefinedLabel => "UNDEFINED LABEL",
            UndefinedVariable => "UNDEFINED VARIABLE",
            DuplicateLabel => "DUPLICATE LABEL",
            InvalidInput => "INVALID INPUT",
            InvalidCondition => "INVALID CONDITION",
            InfiniteLoop => "INFINITE LOOP",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            // Statement indexes are zero based; people count from one.
            suffix.push_str(&format!(" LINE {}", line_number + 1));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", self.code.as_str(), suffix)
        } else {
            write!(f, "{}{}", self.code.as_str(), suffix)
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        error!(IoError; "{}", error)
    }
}
