use super::LineNumber;
use std::borrow::Cow;

/// ## Compile-time and runtime diagnostics
///
/// Every fault in the front end and the machine is one of these.
/// The [`ErrorCode`] decides which class it belongs to.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    location: Location,
    message: Cow<'static, str>,
}

/// Where on the line a compile error was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Nowhere,
    End,
    Lexeme(String),
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$at:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .at($at)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            location: Location::Nowhere,
            message: Cow::Borrowed(""),
        }
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn at(self, location: Location) -> Error {
        debug_assert_eq!(self.location, Location::Nowhere);
        Error { location, ..self }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn text(&self) -> &str {
        if self.message.is_empty() {
            self.code.describe()
        } else {
            &*self.message
        }
    }

    pub fn is_runtime(&self) -> bool {
        self.code.is_runtime()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    TooManyConstants,
    TypeMismatch,
    StackOverflow,
    InternalError,
}

impl ErrorCode {
    pub fn is_runtime(self) -> bool {
        use ErrorCode::*;
        match self {
            SyntaxError | TooManyConstants => false,
            TypeMismatch | StackOverflow | InternalError => true,
        }
    }

    fn describe(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "Syntax error.",
            TooManyConstants => "Too many constants in one chunk.",
            TypeMismatch => "Type mismatch.",
            StackOverflow => "Stack overflow.",
            InternalError => "Internal error.",
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
        if self.is_runtime() {
            write!(f, "{}", self.text())?;
            if let Some(line) = self.line_number {
                write!(f, "\n[line {}] in script", line)?;
            }
            return Ok(());
        }
        if let Some(line) = self.line_number {
            write!(f, "[line {}] ", line)?;
        }
        write!(f, "Error")?;
        match &self.location {
            Location::Nowhere => {}
            Location::End => write!(f, " at end")?,
            Location::Lexeme(s) => write!(f, " at '{}'", s)?,
        }
        write!(f, ": {}", self.text())
    }
}

impl std::error::Error for Error {}
