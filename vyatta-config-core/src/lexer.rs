//! Character scanner for configuration text.
//!
//! Produces tokens tagged with their 1-based line number. Quote state is
//! tracked so that braces and spaces inside a quoted value stay data. A quote
//! left open at the end of a line swallows the rest of that line and nothing
//! more, so scanning never fails.

use std::iter::Peekable;
use std::str::Chars;

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare run of non-space, non-brace characters.
    Word(String),
    /// Double-quoted string with quotes removed and escapes resolved.
    Quoted(String),
    OpenBrace,
    CloseBrace,
    /// `/* ... */` opened and closed on one line, kept verbatim.
    Comment(String),
    /// Double quote with no closing quote on its line; holds the rest of the line.
    Unterminated(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

/// Scan `input` into tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        chars: input.chars().peekable(),
        line: 1,
        tokens: Vec::new(),
    };
    lexer.run();
    lexer.tokens
}

/// Group tokens by source line, dropping lines that produced none.
pub fn split_lines(tokens: Vec<Token>) -> Vec<(usize, Vec<TokenKind>)> {
    let mut lines: Vec<(usize, Vec<TokenKind>)> = Vec::new();
    for token in tokens {
        match lines.last_mut() {
            Some((line, kinds)) if *line == token.line => kinds.push(token.kind),
            _ => lines.push((token.line, vec![token.kind])),
        }
    }
    lines
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer<'_> {
    fn run(&mut self) {
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => {
                    self.chars.next();
                    self.line += 1;
                }
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '{' => {
                    self.chars.next();
                    self.push(TokenKind::OpenBrace);
                }
                '}' => {
                    self.chars.next();
                    self.push(TokenKind::CloseBrace);
                }
                '"' => {
                    self.chars.next();
                    let kind = self.read_quoted();
                    self.push(kind);
                }
                _ => {
                    let word = self.read_word();
                    let kind = match comment_text(&word, self) {
                        Some(comment) => TokenKind::Comment(comment),
                        None => TokenKind::Word(word),
                    };
                    self.push(kind);
                }
            }
        }
    }

    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token {
            kind,
            line: self.line,
        });
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() || c == '{' || c == '}' {
                break;
            }
            word.push(c);
            self.chars.next();
        }
        word
    }

    /// Read up to the closing quote. The newline ending an unterminated
    /// string is left for `run` so the line count stays right.
    fn read_quoted(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => break,
                '"' => {
                    self.chars.next();
                    return TokenKind::Quoted(text);
                }
                '\\' => {
                    self.chars.next();
                    match self.chars.peek() {
                        Some(&next @ ('"' | '\\')) => {
                            text.push(next);
                            self.chars.next();
                        }
                        _ => text.push('\\'),
                    }
                }
                _ => {
                    text.push(c);
                    self.chars.next();
                }
            }
        }
        TokenKind::Unterminated(text)
    }

    /// Consume the rest of the line up to and including the first `*/`.
    ///
    /// Returns `None` (consuming nothing) when the line has no terminator.
    fn read_comment_tail(&mut self) -> Option<String> {
        let rest: String = self.chars.clone().take_while(|&c| c != '\n').collect();
        let end = rest.find("*/")? + 2;
        let tail = rest[..end].to_string();
        for _ in tail.chars() {
            self.chars.next();
        }
        Some(tail)
    }
}

fn comment_text(word: &str, lexer: &mut Lexer<'_>) -> Option<String> {
    if !word.starts_with("/*") {
        return None;
    }
    if word.len() >= 4 && word.ends_with("*/") {
        return Some(word.to_string());
    }
    lexer
        .read_comment_tail()
        .map(|tail| format!("{word}{tail}"))
}

#[cfg(test)]
mod tests {
    use super::{split_lines, tokenize, TokenKind};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn braces_inside_quotes_are_data() {
        assert_eq!(
            kinds(r#"description "a { b }""#),
            vec![
                TokenKind::Word("description".to_string()),
                TokenKind::Quoted("a { b }".to_string()),
            ]
        );
    }

    #[test]
    fn escaped_quotes_are_resolved() {
        assert_eq!(
            kinds(r#"description "say \"hi\" \\o/""#),
            vec![
                TokenKind::Word("description".to_string()),
                TokenKind::Quoted(r#"say "hi" \o/"#.to_string()),
            ]
        );
    }

    #[test]
    fn comment_keeps_inner_spacing_verbatim() {
        assert_eq!(
            kinds("/*  Default   route */"),
            vec![TokenKind::Comment("/*  Default   route */".to_string())]
        );
        assert_eq!(
            kinds("/*tight*/"),
            vec![TokenKind::Comment("/*tight*/".to_string())]
        );
    }

    #[test]
    fn unterminated_comment_is_a_word() {
        assert_eq!(
            kinds("/* open"),
            vec![
                TokenKind::Word("/*".to_string()),
                TokenKind::Word("open".to_string()),
            ]
        );
    }

    #[test]
    fn opener_without_space_splits_brace() {
        assert_eq!(
            kinds("interfaces{"),
            vec![
                TokenKind::Word("interfaces".to_string()),
                TokenKind::OpenBrace,
            ]
        );
    }

    #[test]
    fn open_quote_stops_at_end_of_line() {
        let tokens = tokenize("description \"open {\nnext");
        let lines = split_lines(tokens);
        assert_eq!(
            lines,
            vec![
                (
                    1,
                    vec![
                        TokenKind::Word("description".to_string()),
                        TokenKind::Unterminated("open {".to_string()),
                    ]
                ),
                (2, vec![TokenKind::Word("next".to_string())]),
            ]
        );
    }

    #[test]
    fn split_lines_groups_and_skips_blank_lines() {
        let tokens = tokenize("a {\r\n\n  b c\n}\n");
        let lines = split_lines(tokens);
        let numbers: Vec<usize> = lines.iter().map(|(line, _)| *line).collect();
        assert_eq!(numbers, vec![1, 3, 4]);
        assert_eq!(lines[1].1.len(), 2);
    }
}
