use super::token::{Operator, Token, TokenKind, Word};
use super::{Analyzer, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Consume the token stream to completion or fail with the first error.
/// No AST is built; the outcome is accept or reject with a diagnostic.
/// `Analyzer::collect_line_numbers` must have run over the same stream
/// first so GOTO targets resolve forward.
pub fn parse(tokens: &[Token], analyzer: &mut Analyzer) -> Result<()> {
    Parser {
        tokens: tokens.to_vec(),
        pos: 0,
        analyzer,
    }
    .program()
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    analyzer: &'a mut Analyzer,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eof_error(&self, message: &str) -> Error {
        let (line, column) = match self.tokens.last() {
            Some(token) => (token.line, token.column),
            None => (0, 0),
        };
        error!(SyntaxError, line, ..column; "{} AT END OF PROGRAM", message)
    }

    fn program(&mut self) -> Result<()> {
        while self.peek().is_some() {
            self.statement()?;
        }
        Ok(())
    }

    /// Every statement starts with a line-number marker strictly greater
    /// than the previous one.
    fn line_number(&mut self) -> Result<()> {
        match self.next() {
            Some(token) => {
                if let TokenKind::LineNumber(n) = token.kind {
                    self.analyzer
                        .check_line_number_order(n, token.line, token.column)
                } else {
                    Err(
                        error!(SyntaxError, token.line, ..token.column; "EXPECTED A LINE NUMBER, FOUND '{}'", token.kind),
                    )
                }
            }
            None => Err(self.eof_error("EXPECTED A LINE NUMBER")),
        }
    }

    fn statement(&mut self) -> Result<()> {
        self.line_number()?;
        let token = match self.next() {
            Some(token) => token,
            None => return Err(self.eof_error("EXPECTED A STATEMENT")),
        };
        if self.analyzer.end_seen() {
            match token.kind {
                TokenKind::Word(Word::End) => {}
                _ => {
                    return Err(
                        error!(SyntaxError, token.line, ..token.column; "NO STATEMENT MAY FOLLOW 'END'"),
                    );
                }
            }
        }
        match token.kind {
            TokenKind::Word(Word::Rem) => Ok(()),
            TokenKind::Word(Word::Input) => self.input_statement(),
            TokenKind::Word(Word::Let) => self.let_statement(),
            TokenKind::Word(Word::Print) => self.expression(),
            TokenKind::Word(Word::Goto) => self.goto_target(),
            TokenKind::Word(Word::If) => self.if_statement(),
            TokenKind::Word(Word::End) => self.analyzer.check_end_once(token.line, token.column),
            _ => Err(
                error!(SyntaxError, token.line, ..token.column; "INVALID STATEMENT '{}'", token.kind),
            ),
        }
    }

    /// INPUT declares and initializes in one step; an existing variable
    /// is treated as a reassignment target.
    fn input_statement(&mut self) -> Result<()> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Variable(name),
                line,
                column,
            }) => {
                if self.analyzer.is_declared(name) {
                    self.analyzer.check_assignment_target(name, line, column)
                } else {
                    self.analyzer.declare_variable(name, line, column)?;
                    self.analyzer.initialize_variable(name, line, column)
                }
            }
            Some(token) => Err(
                error!(SyntaxError, token.line, ..token.column; "EXPECTED A VARIABLE AFTER 'INPUT'"),
            ),
            None => Err(self.eof_error("EXPECTED A VARIABLE AFTER 'INPUT'")),
        }
    }

    /// LET marks its target initialized only after the right-hand
    /// expression parses, so `LET x = x` on a fresh variable fails.
    fn let_statement(&mut self) -> Result<()> {
        let (name, line, column) = match self.next() {
            Some(Token {
                kind: TokenKind::Variable(name),
                line,
                column,
            }) => (name, line, column),
            Some(token) => {
                return Err(
                    error!(SyntaxError, token.line, ..token.column; "EXPECTED A VARIABLE AFTER 'LET'"),
                );
            }
            None => return Err(self.eof_error("EXPECTED A VARIABLE AFTER 'LET'")),
        };
        if self.analyzer.is_declared(name) {
            self.analyzer.check_assignment_target(name, line, column)?;
        } else {
            self.analyzer.declare_variable(name, line, column)?;
        }
        match self.next() {
            Some(Token {
                kind: TokenKind::Assignment,
                ..
            }) => {}
            Some(token) => {
                return Err(
                    error!(SyntaxError, token.line, ..token.column; "EXPECTED '=' AFTER VARIABLE '{}'", name),
                );
            }
            None => return Err(self.eof_error("EXPECTED '='")),
        }
        self.expression()?;
        self.analyzer.initialize_variable(name, line, column)
    }

    fn goto_target(&mut self) -> Result<()> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Integer(n),
                line,
                column,
            }) => match LineNumber::try_from(n) {
                Ok(target) => self.analyzer.check_goto_target(target, line, column),
                Err(_) => Err(error!(SemanticError, line, ..column; "UNDEFINED LINE {} IN GOTO", n)),
            },
            Some(token) => Err(
                error!(SyntaxError, token.line, ..token.column; "EXPECTED A LINE NUMBER AFTER 'GOTO'"),
            ),
            None => Err(self.eof_error("EXPECTED A LINE NUMBER AFTER 'GOTO'")),
        }
    }

    fn if_statement(&mut self) -> Result<()> {
        self.operand()?;
        match self.next() {
            Some(Token {
                kind: TokenKind::Relop(_),
                ..
            }) => {}
            Some(token) => {
                return Err(
                    error!(SyntaxError, token.line, ..token.column; "EXPECTED A RELATIONAL OPERATOR"),
                );
            }
            None => return Err(self.eof_error("EXPECTED A RELATIONAL OPERATOR")),
        }
        self.operand()?;
        match self.next() {
            Some(Token {
                kind: TokenKind::Word(Word::Goto),
                ..
            }) => self.goto_target(),
            Some(token) => Err(
                error!(SyntaxError, token.line, ..token.column; "EXPECTED 'GOTO' AFTER CONDITION"),
            ),
            None => Err(self.eof_error("EXPECTED 'GOTO' AFTER CONDITION")),
        }
    }

    /// A variable or integer literal. Variables must be declared and
    /// initialized at the point of use.
    fn operand(&mut self) -> Result<()> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Variable(name),
                line,
                column,
            }) => self.analyzer.check_usage(name, line, column),
            Some(Token {
                kind: TokenKind::Integer(_),
                ..
            }) => Ok(()),
            Some(token) => Err(
                error!(SyntaxError, token.line, ..token.column; "EXPECTED A VARIABLE OR INTEGER"),
            ),
            None => Err(self.eof_error("EXPECTED A VARIABLE OR INTEGER")),
        }
    }

    /// At most one binary operator per expression. A leading `-` folds
    /// with the following integer into a single negative literal.
    fn expression(&mut self) -> Result<()> {
        if let Some(Token {
            kind: TokenKind::Operator(Operator::Subtract),
            ..
        }) = self.peek()
        {
            self.fold_negative()?;
            return self.operand();
        }
        self.operand()?;
        if let Some(Token {
            kind: TokenKind::Operator(_),
            ..
        }) = self.peek()
        {
            self.next();
            self.operand()?;
        }
        if let Some(token) = self.peek() {
            if let TokenKind::Operator(_) = token.kind {
                return Err(
                    error!(SyntaxError, token.line, ..token.column; "MORE THAN ONE OPERATION IS NOT ALLOWED"),
                );
            }
        }
        Ok(())
    }

    /// Splice `-` and the integer directly after it into one synthetic
    /// negative literal at the cursor position.
    fn fold_negative(&mut self) -> Result<()> {
        let minus = match self.next() {
            Some(token) => token,
            None => return Err(self.eof_error("EXPECTED AN EXPRESSION")),
        };
        debug_assert_eq!(
            minus.kind,
            TokenKind::Operator(Operator::Subtract),
            "fold_negative called off a '-'"
        );
        match self.next() {
            Some(Token {
                kind: TokenKind::Integer(n),
                ..
            }) => {
                let folded = Token::new(TokenKind::Integer(-n), minus.line, minus.column);
                self.pos -= 2;
                self.tokens.splice(self.pos..self.pos + 2, Some(folded));
                Ok(())
            }
            Some(token) => Err(
                error!(SyntaxError, token.line, ..token.column; "EXPECTED AN INTEGER AFTER '-'"),
            ),
            None => Err(self.eof_error("EXPECTED AN INTEGER AFTER '-'")),
        }
    }
}
