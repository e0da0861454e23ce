//! Thin driver: read a program from a file, validate it, report.

extern crate ansi_term;

use ansi_term::{Colour, Style};
use simple::lang;
use std::env;
use std::fs;
use std::process::exit;

fn main() {
    let mut dump_tokens = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => dump_tokens = true,
            _ => path = Some(arg),
        }
    }
    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("usage: simple [--tokens] <program>");
            exit(64);
        }
    };
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: {}", path, error);
            exit(66);
        }
    };
    if dump_tokens {
        if let Ok(tokens) = lang::lex(&source) {
            for token in &tokens {
                println!("{:?}", token);
            }
        }
    }
    match lang::check(&source) {
        Ok(()) => println!("{}", Style::new().bold().paint("OK.")),
        Err(error) => {
            eprintln!("{}", Colour::Red.bold().paint(error.to_string()));
            exit(65);
        }
    }
}
