use thiserror::Error;

use crate::generator::quote;
use crate::lexer::{split_lines, tokenize, TokenKind};
use crate::tree::{compound_label, CommentPosition, Document, Node, Section};

/// Malformed configuration input. Every variant aborts the parse; no partial
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A section opener reached end of input without its closing brace.
    #[error("line {line}: section '{label}' is never closed")]
    UnclosedSection { label: String, line: usize },
    /// A `}` with no open section at that level.
    #[error("line {line}: closing brace without an open section")]
    UnexpectedCloser { line: usize },
    /// A section opener that is not `key {` or `key identifier {`.
    #[error("line {line}: section header must be `key {{` or `key identifier {{`")]
    InvalidHeader { line: usize },
    /// A brace in a position the grammar does not allow.
    #[error("line {line}: unexpected brace")]
    UnexpectedBrace { line: usize },
    /// Sections nested deeper than [`MAX_NESTING`].
    #[error("line {line}: sections nested deeper than {limit} levels")]
    TooDeep { line: usize, limit: usize },
}

/// Deepest section nesting accepted by [`parse`]; top-level sections are level 1.
pub const MAX_NESTING: usize = 128;

/// Parse configuration text into a [`Document`].
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let lines = split_lines(tokenize(input));
    let mut cursor = Cursor { lines, pos: 0 };
    parse_document(&mut cursor)
}

/// Shared position over the tokenized lines, advanced by every recursion level.
struct Cursor {
    lines: Vec<(usize, Vec<TokenKind>)>,
    pos: usize,
}

impl Cursor {
    fn next_line(&mut self) -> Option<(usize, Vec<TokenKind>)> {
        let line = self.lines.get_mut(self.pos)?;
        self.pos += 1;
        Some((line.0, std::mem::take(&mut line.1)))
    }
}

/// How a single line participates in the grammar.
enum Line {
    Comment(String),
    Open(String),
    Close,
    Flag(String),
    Value(String, String),
    Ignored,
}

fn classify(line: usize, tokens: Vec<TokenKind>) -> Result<Line, ParseError> {
    if tokens.last() == Some(&TokenKind::OpenBrace) {
        return classify_opener(line, &tokens[..tokens.len() - 1]);
    }
    if tokens
        .iter()
        .any(|token| matches!(token, TokenKind::OpenBrace))
    {
        return Err(ParseError::UnexpectedBrace { line });
    }
    if tokens.first() == Some(&TokenKind::CloseBrace) {
        if tokens.len() == 1 {
            return Ok(Line::Close);
        }
        return Err(ParseError::UnexpectedBrace { line });
    }
    if tokens
        .iter()
        .any(|token| matches!(token, TokenKind::CloseBrace))
    {
        return Err(ParseError::UnexpectedBrace { line });
    }

    let mut tokens = tokens.into_iter();
    let classified = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(TokenKind::Comment(text)), None, None) => Line::Comment(text),
        (Some(TokenKind::Word(key)), None, None) => Line::Flag(key),
        (
            Some(TokenKind::Word(key)),
            Some(TokenKind::Word(value) | TokenKind::Quoted(value)),
            None,
        ) => Line::Value(key, value),
        _ => Line::Ignored,
    };
    Ok(classified)
}

fn classify_opener(line: usize, head: &[TokenKind]) -> Result<Line, ParseError> {
    match head {
        [TokenKind::Word(key)] => Ok(Line::Open(key.clone())),
        [TokenKind::Word(key), TokenKind::Word(identifier)] => {
            Ok(Line::Open(compound_label(key, identifier)))
        }
        [TokenKind::Word(key), TokenKind::Quoted(identifier)] => {
            Ok(Line::Open(compound_label(key, &quote(identifier))))
        }
        _ if head
            .iter()
            .any(|token| matches!(token, TokenKind::OpenBrace | TokenKind::CloseBrace)) =>
        {
            Err(ParseError::UnexpectedBrace { line })
        }
        _ => Err(ParseError::InvalidHeader { line }),
    }
}

fn parse_document(cursor: &mut Cursor) -> Result<Document, ParseError> {
    let mut document = Document::new();
    let mut pending_comment: Option<String> = None;

    while let Some((line, tokens)) = cursor.next_line() {
        match classify(line, tokens)? {
            Line::Comment(text) => pending_comment = Some(text),
            Line::Open(label) => {
                let section = parse_block(cursor, &label, line, 1, pending_comment.take())?;
                document.insert(label, section);
            }
            Line::Close => return Err(ParseError::UnexpectedCloser { line }),
            // Only sections live at the top level.
            Line::Flag(_) | Line::Value(_, _) | Line::Ignored => pending_comment = None,
        }
    }

    Ok(document)
}

/// Parse the body of the block opened on `opened_at` through its matching closer.
fn parse_block(
    cursor: &mut Cursor,
    label: &str,
    opened_at: usize,
    depth: usize,
    comment: Option<String>,
) -> Result<Section, ParseError> {
    if depth > MAX_NESTING {
        return Err(ParseError::TooDeep {
            line: opened_at,
            limit: MAX_NESTING,
        });
    }

    let mut section = Section::new();
    if comment.is_some() {
        section.comment = comment;
        section.comment_position = CommentPosition::Before;
    }
    let mut pending_comment: Option<String> = None;

    while let Some((line, tokens)) = cursor.next_line() {
        match classify(line, tokens)? {
            Line::Comment(text) => pending_comment = Some(text),
            Line::Open(child_label) => {
                let child =
                    parse_block(cursor, &child_label, line, depth + 1, pending_comment.take())?;
                section.insert(child_label, Node::Section(child));
            }
            Line::Close => return Ok(section),
            Line::Flag(key) => {
                section.set_flag(key.as_str());
                attach_leaf_comment(&mut section, &key, pending_comment.take());
            }
            Line::Value(key, value) => {
                section.push_value(key.as_str(), value);
                attach_leaf_comment(&mut section, &key, pending_comment.take());
            }
            Line::Ignored => pending_comment = None,
        }
    }

    Err(ParseError::UnclosedSection {
        label: label.to_string(),
        line: opened_at,
    })
}

fn attach_leaf_comment(section: &mut Section, key: &str, comment: Option<String>) {
    if let Some(comment) = comment {
        section.set_leaf_comment(key, comment);
    }
}
