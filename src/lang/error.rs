use super::Column;

pub struct Error {
    kind: ErrorKind,
    line: usize,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($kind:ident, $line:expr, ..$col:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$kind)
            .at($line, $col)
            .message(format!($($msg)+))
    };
    ($kind:ident, $line:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$kind)
            .at($line, 0)
            .message(format!($($msg)+))
    };
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            line: 0,
            column: 0,
            message: String::new(),
        }
    }

    pub fn at(self, line: usize, column: Column) -> Error {
        debug_assert_eq!(self.line, 0);
        Error {
            line,
            column,
            ..self
        }
    }

    pub fn message(self, message: String) -> Error {
        debug_assert!(self.message.is_empty());
        Error { message, ..self }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 1-based physical source line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based column within the line remainder.
    pub fn column(&self) -> Column {
        self.column
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    SemanticError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;
        match self {
            LexicalError => write!(f, "LEXICAL ERROR"),
            SyntaxError => write!(f, "SYNTAX ERROR"),
            SemanticError => write!(f, "SEMANTIC ERROR"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} IN LINE {} ({})", self.kind, self.line, self.column)
        } else {
            write!(
                f,
                "{} IN LINE {} ({}); {}",
                self.kind, self.line, self.column, self.message
            )
        }
    }
}
