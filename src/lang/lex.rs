use super::{token::*, Column, Error, LineNumber};
use crate::error;

/// Tokenize an entire program. Every non-blank physical line must begin
/// with a decimal line-number marker; blank lines advance the line counter
/// but contribute no tokens. The first malformed lexeme aborts the run.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens: Vec<Token> = vec![];
    for (index, line) in source.lines().enumerate() {
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(
                error!(LexicalError, number; "LINE DOES NOT BEGIN WITH A LINE NUMBER"),
            );
        }
        let marker = match digits.parse::<LineNumber>() {
            Ok(n) => n,
            Err(_) => {
                return Err(error!(LexicalError, number; "INVALID LINE NUMBER '{}'", digits));
            }
        };
        tokens.push(Token::new(TokenKind::LineNumber(marker), number, 0));
        // Column tracking restarts at zero for the remainder of the line.
        for token in LineLexer::new(&line[digits.len()..], number) {
            if let TokenKind::Error(lexeme) = &token.kind {
                return Err(invalid_lexeme(&token, lexeme));
            }
            tokens.push(token);
        }
    }
    Ok(tokens)
}

fn invalid_lexeme(token: &Token, lexeme: &str) -> Error {
    let first = lexeme.chars().next();
    if lexeme.chars().any(|c| c.is_ascii_uppercase()) {
        error!(LexicalError, token.line, ..token.column; "INVALID UPPERCASE LEXEME '{}'", lexeme)
    } else if first.map_or(false, |c| c.is_ascii_alphabetic()) {
        error!(LexicalError, token.line, ..token.column; "INVALID IDENTIFIER '{}'", lexeme)
    } else if first.map_or(false, |c| c.is_ascii_digit()) {
        error!(LexicalError, token.line, ..token.column; "INVALID INTEGER '{}'", lexeme)
    } else {
        error!(LexicalError, token.line, ..token.column; "INVALID CHARACTER '{}'", lexeme)
    }
}

fn is_simple_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

struct LineLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    col: Column,
    remark: bool,
}

impl<'a> LineLexer<'a> {
    fn new(s: &'a str, line: usize) -> LineLexer<'a> {
        LineLexer {
            chars: s.chars().peekable(),
            line,
            col: 0,
            remark: false,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.chars.peek() == Some(&ch) {
            self.bump();
            return true;
        }
        false
    }

    fn token(&self, kind: TokenKind, start: Column) -> Token {
        Token::new(kind, self.line, start)
    }

    /// A maximal run of letters and digits. Reserved words match whole
    /// runs only, so `printer` is never mistaken for `PRINT`.
    fn word(&mut self) -> Option<Token> {
        let start = self.col;
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !pk.is_ascii_alphanumeric() {
                break;
            }
            s.push(*pk);
            self.bump();
        }
        debug_assert!(!s.is_empty(), "failed to scan word");
        if s.chars().all(|c| c.is_ascii_digit()) {
            return Some(match s.parse::<i64>() {
                Ok(n) => self.token(TokenKind::Integer(n), start),
                Err(_) => self.token(TokenKind::Error(s), start),
            });
        }
        if let Some(word) = Word::from_lexeme(&s) {
            if let Word::Rem = word {
                self.remark = true;
            }
            return Some(self.token(TokenKind::Word(word), start));
        }
        let mut letters = s.chars();
        if let (Some(c), None) = (letters.next(), letters.next()) {
            if c.is_ascii_lowercase() {
                return Some(self.token(TokenKind::Variable(c), start));
            }
        }
        Some(self.token(TokenKind::Error(s), start))
    }

    /// Operators and everything else. Two-character relational operators
    /// are matched before their single-character prefixes.
    fn minutia(&mut self) -> Option<Token> {
        let start = self.col;
        let ch = self.bump()?;
        let kind = match ch {
            '>' if self.eat('=') => TokenKind::Relop(Relop::GreaterEqual),
            '>' => TokenKind::Relop(Relop::Greater),
            '<' if self.eat('=') => TokenKind::Relop(Relop::LessEqual),
            '<' => TokenKind::Relop(Relop::Less),
            '=' if self.eat('=') => TokenKind::Relop(Relop::Equal),
            '=' => TokenKind::Assignment,
            '!' if self.eat('=') => TokenKind::Relop(Relop::NotEqual),
            '+' => TokenKind::Operator(Operator::Add),
            '-' => TokenKind::Operator(Operator::Subtract),
            '*' => TokenKind::Operator(Operator::Multiply),
            '/' => TokenKind::Operator(Operator::Divide),
            '%' => TokenKind::Operator(Operator::Modulo),
            _ => TokenKind::Error(ch.to_string()),
        };
        Some(self.token(kind, start))
    }
}

impl<'a> Iterator for LineLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remark {
                return None;
            }
            let pk = *self.chars.peek()?;
            if is_simple_whitespace(pk) {
                self.bump();
                continue;
            }
            if pk.is_ascii_alphanumeric() {
                return self.word();
            }
            return self.minutia();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ErrorKind;
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        lex(s).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_input_line() {
        let tokens = lex("10 INPUT x").unwrap();
        let mut x = tokens.iter();
        assert_eq!(x.next(), Some(&Token::new(TokenKind::LineNumber(10), 1, 0)));
        assert_eq!(
            x.next(),
            Some(&Token::new(TokenKind::Word(Word::Input), 1, 1))
        );
        assert_eq!(x.next(), Some(&Token::new(TokenKind::Variable('x'), 1, 7)));
        assert_eq!(x.next(), None);
    }

    #[test]
    fn test_let_line() {
        assert_eq!(
            kinds("20 LET x = 1 + 2"),
            vec![
                TokenKind::LineNumber(20),
                TokenKind::Word(Word::Let),
                TokenKind::Variable('x'),
                TokenKind::Assignment,
                TokenKind::Integer(1),
                TokenKind::Operator(Operator::Add),
                TokenKind::Integer(2),
            ]
        );
    }

    #[test]
    fn test_relops_before_prefixes() {
        assert_eq!(
            kinds("10 IF x >= 1 GOTO 20"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Word(Word::If),
                TokenKind::Variable('x'),
                TokenKind::Relop(Relop::GreaterEqual),
                TokenKind::Integer(1),
                TokenKind::Word(Word::Goto),
                TokenKind::Integer(20),
            ]
        );
        assert_eq!(
            kinds("10 x==y<=z!=w>v<u=t"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Variable('x'),
                TokenKind::Relop(Relop::Equal),
                TokenKind::Variable('y'),
                TokenKind::Relop(Relop::LessEqual),
                TokenKind::Variable('z'),
                TokenKind::Relop(Relop::NotEqual),
                TokenKind::Variable('w'),
                TokenKind::Relop(Relop::Greater),
                TokenKind::Variable('v'),
                TokenKind::Relop(Relop::Less),
                TokenKind::Variable('u'),
                TokenKind::Assignment,
                TokenKind::Variable('t'),
            ]
        );
    }

    #[test]
    fn test_remark_discards_rest_of_line() {
        assert_eq!(
            kinds("10 REM anything goes here < > !! 123"),
            vec![TokenKind::LineNumber(10), TokenKind::Word(Word::Rem)]
        );
    }

    #[test]
    fn test_blank_lines_advance_line_counter() {
        let tokens = lex("10 REM setup\n\n\n30 END").unwrap();
        assert_eq!(tokens[2], Token::new(TokenKind::LineNumber(30), 4, 0));
        assert_eq!(tokens[3], Token::new(TokenKind::Word(Word::End), 4, 1));
    }

    #[test]
    fn test_missing_line_number() {
        let error = lex("PRINT x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert_eq!(error.line(), 1);
        assert!(error
            .to_string()
            .contains("LINE DOES NOT BEGIN WITH A LINE NUMBER"));
    }

    #[test]
    fn test_line_number_overflow() {
        let error = lex("99999 END").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert!(error.to_string().contains("INVALID LINE NUMBER '99999'"));
    }

    #[test]
    fn test_multi_letter_identifier() {
        let error = lex("10 LET ab = 1").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert_eq!(error.line(), 1);
        assert_eq!(error.column(), 5);
        assert!(error.to_string().contains("INVALID IDENTIFIER 'ab'"));
    }

    #[test]
    fn test_uppercase_variable() {
        let error = lex("10 LET X = 1").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert_eq!(error.column(), 5);
        assert!(error.to_string().contains("INVALID UPPERCASE LEXEME 'X'"));
    }

    #[test]
    fn test_mixed_case_keyword() {
        let error = lex("10 Let x = 1").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert!(error.to_string().contains("INVALID UPPERCASE LEXEME 'Let'"));
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        let error = lex("10 printer").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert!(error.to_string().contains("INVALID IDENTIFIER 'printer'"));
    }

    #[test]
    fn test_integer_glued_to_letter() {
        let error = lex("10 GOTO 5a").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert!(error.to_string().contains("INVALID INTEGER '5a'"));
    }

    #[test]
    fn test_bang_without_equal() {
        let error = lex("10 IF x ! 1 GOTO 5").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert!(error.to_string().contains("INVALID CHARACTER '!'"));
    }

    #[test]
    fn test_unrecognized_character() {
        let error = lex("10 LET x = 1 @ 2").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LexicalError);
        assert_eq!(error.column(), 11);
        assert!(error.to_string().contains("INVALID CHARACTER '@'"));
    }

    #[test]
    fn test_no_space_after_marker() {
        assert_eq!(
            kinds("10PRINT x"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Word(Word::Print),
                TokenKind::Variable('x'),
            ]
        );
    }
}
