/*!
# SIMPLE Language Module

This Rust module provides lexical, syntactic, and semantic analysis of the
SIMPLE language. Validation is a one-shot batch transformation: source text
in, acceptance or the first error out. Nothing is executed or generated.

*/

#[macro_use]
mod error;
mod analyze;
mod lex;
mod parse;
pub mod token;

pub use analyze::Analyzer;
pub use error::Error;
pub use error::ErrorKind;
pub use lex::lex;
pub use parse::parse;

/// 0-based column within the remainder of a source line.
pub type Column = usize;
/// A line-number marker value, also the unit of GOTO targets.
pub type LineNumber = u16;

/// Run the full pipeline over a program: tokenize, collect every
/// line-number marker, then parse with semantic checks. The marker
/// pre-pass runs over the entire stream before parsing begins so that
/// forward GOTO references resolve.
pub fn check(source: &str) -> Result<(), Error> {
    let tokens = lex(source)?;
    let mut analyzer = Analyzer::default();
    analyzer.collect_line_numbers(&tokens);
    parse(&tokens, &mut analyzer)
}
