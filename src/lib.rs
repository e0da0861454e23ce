//! # SIMPLE
//!
//! A validating front end for the SIMPLE programming language, a tiny
//! line-numbered BASIC dialect with `REM`, `INPUT`, `LET`, `PRINT`,
//! `GOTO`, `IF … GOTO`, and `END`.
//!
//! Programs are one statement per line, each line prefixed with a
//! strictly increasing line number. Variables are single lowercase
//! letters and expressions allow at most one binary operator.
//!
//! ```
//! use simple::lang;
//!
//! let program = "10 INPUT x\n20 PRINT x\n30 END";
//! assert!(lang::check(program).is_ok());
//! ```

pub mod lang;
