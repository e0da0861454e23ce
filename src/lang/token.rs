use super::{Column, LineNumber};

/// A lexical unit with its source position. Created by the lexer and
/// consumed, never mutated, by the parser. The parser synthesizes exactly
/// one extra case: a negative integer literal folded from `-` followed
/// directly by an integer.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: Column,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: Column) -> Token {
        Token { kind, line, column }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    LineNumber(LineNumber),
    Assignment,
    Operator(Operator),
    Relop(Relop),
    Word(Word),
    Variable(char),
    Integer(i64),
    Error(String),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            LineNumber(n) => write!(f, "{}", n),
            Assignment => write!(f, "="),
            Operator(op) => write!(f, "{}", op),
            Relop(op) => write!(f, "{}", op),
            Word(word) => write!(f, "{}", word),
            Variable(c) => write!(f, "{}", c),
            Integer(n) => write!(f, "{}", n),
            Error(s) => write!(f, "{}", s),
        }
    }
}

/// The seven reserved words. All uppercase; `Let` or `let` never match.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Rem,
    Input,
    Let,
    Print,
    Goto,
    If,
    End,
}

impl Word {
    pub fn from_lexeme(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "REM" => Some(Rem),
            "INPUT" => Some(Input),
            "LET" => Some(Let),
            "PRINT" => Some(Print),
            "GOTO" => Some(Goto),
            "IF" => Some(If),
            "END" => Some(End),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Rem => write!(f, "REM"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            End => write!(f, "END"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulo => write!(f, "%"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relop {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl std::fmt::Display for Relop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relop::*;
        match self {
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Greater => write!(f, ">"),
            Less => write!(f, "<"),
            GreaterEqual => write!(f, ">="),
            LessEqual => write!(f, "<="),
        }
    }
}
