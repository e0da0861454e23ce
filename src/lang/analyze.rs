use super::token::{Token, TokenKind};
use super::{Column, Error, LineNumber};
use crate::error;
use std::collections::{HashMap, HashSet};

type Result<T> = std::result::Result<T, Error>;

/// Shared analysis state consulted by the parser at every declaration,
/// use, line-number, and GOTO event. Owned by the single analysis pass;
/// all mutation goes through the operations below.
#[derive(Debug, Default)]
pub struct Analyzer {
    symbols: HashMap<char, Symbol>,
    line_numbers: HashSet<LineNumber>,
    last_line_number: LineNumber,
    end_seen: bool,
}

#[derive(Debug)]
struct Symbol {
    initialized: bool,
}

impl Analyzer {
    /// Pre-pass over the whole token stream. Must run to completion
    /// before any GOTO target is validated so that forward references
    /// resolve.
    pub fn collect_line_numbers(&mut self, tokens: &[Token]) {
        for token in tokens {
            if let TokenKind::LineNumber(n) = token.kind {
                self.register_line_number(n);
            }
        }
    }

    pub fn register_line_number(&mut self, n: LineNumber) {
        self.line_numbers.insert(n);
    }

    pub fn is_declared(&self, name: char) -> bool {
        self.symbols.contains_key(&name)
    }

    pub fn declare_variable(&mut self, name: char, line: usize, column: Column) -> Result<()> {
        if self.symbols.contains_key(&name) {
            return Err(
                error!(SemanticError, line, ..column; "VARIABLE '{}' ALREADY DECLARED", name),
            );
        }
        self.symbols.insert(name, Symbol { initialized: false });
        Ok(())
    }

    pub fn initialize_variable(&mut self, name: char, line: usize, column: Column) -> Result<()> {
        match self.symbols.get_mut(&name) {
            Some(symbol) => {
                symbol.initialized = true;
                Ok(())
            }
            None => Err(error!(SemanticError, line, ..column; "VARIABLE '{}' NOT DECLARED", name)),
        }
    }

    pub fn check_usage(&self, name: char, line: usize, column: Column) -> Result<()> {
        match self.symbols.get(&name) {
            Some(symbol) if symbol.initialized => Ok(()),
            Some(_) => Err(
                error!(SemanticError, line, ..column; "VARIABLE '{}' DECLARED BUT NOT INITIALIZED", name),
            ),
            None => Err(error!(SemanticError, line, ..column; "VARIABLE '{}' NOT DECLARED", name)),
        }
    }

    pub fn check_assignment_target(&self, name: char, line: usize, column: Column) -> Result<()> {
        if self.symbols.contains_key(&name) {
            return Ok(());
        }
        Err(error!(SemanticError, line, ..column; "VARIABLE '{}' NOT DECLARED", name))
    }

    pub fn check_end_once(&mut self, line: usize, column: Column) -> Result<()> {
        if self.end_seen {
            return Err(error!(SemanticError, line, ..column; "'END' ALREADY ENCOUNTERED"));
        }
        self.end_seen = true;
        Ok(())
    }

    pub fn end_seen(&self) -> bool {
        self.end_seen
    }

    pub fn check_line_number_order(
        &mut self,
        n: LineNumber,
        line: usize,
        column: Column,
    ) -> Result<()> {
        if n <= self.last_line_number {
            return Err(
                error!(SemanticError, line, ..column; "LINE NUMBER {} IS NOT GREATER THAN {}", n, self.last_line_number),
            );
        }
        self.last_line_number = n;
        Ok(())
    }

    pub fn check_goto_target(&self, n: LineNumber, line: usize, column: Column) -> Result<()> {
        if self.line_numbers.contains(&n) {
            return Ok(());
        }
        Err(error!(SemanticError, line, ..column; "UNDEFINED LINE {} IN GOTO", n))
    }
}
