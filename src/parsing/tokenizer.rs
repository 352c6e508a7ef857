
//! Maximal-munch tokenizer for infix expressions.
//!
//! Numbers and identifiers are grown one character at a time. The
//! tokenizer peeks at the next character and keeps it only if the
//! token read so far, extended by that character, is still a valid
//! token of the same kind; otherwise it commits what it has and the
//! peeked character starts the next token. Operators are recognized
//! eagerly, as soon as the text read so far spells one exactly, and
//! operator keywords (`div`, `pow`, `neg`, ...) are recognized the
//! same way inside identifier runs.
//!
//! Whitespace separates tokens and is otherwise skipped.

use super::operator::OperatorKind;
use super::source::{SourceOffset, Span};
use crate::expr::{InfixExpr, Token};

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;
use log::trace;

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  whole_input: &'a str,
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum LexError {
  #[error("Expected token, but found EOF at {0}")]
  UnexpectedEOF(SourceOffset),
  #[error("Unexpected character '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  #[error("Malformed number '{0}' at {1}")]
  MalformedNumber(String, Span),
  #[error("Unknown operator '{0}' at {1}")]
  UnknownOperator(String, Span),
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      whole_input: input,
      input,
      position: SourceOffset(0),
    }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Consumes and returns one character, or `None` at the end of the
  /// input.
  pub fn advance_char(&mut self) -> Option<char> {
    let ch = self.peek()?;
    self.position += ch.len_utf8();
    self.input = &self.input[ch.len_utf8()..];
    Some(ch)
  }

  /// The text consumed since `start`.
  pub fn since(&self, start: SourceOffset) -> &'a str {
    &self.whole_input[start.0..self.position.0]
  }

  /// The text consumed since `start`, extended by the next (not yet
  /// consumed) character. `None` at the end of the input.
  pub fn since_with_lookahead(&self, start: SourceOffset) -> Option<&'a str> {
    let ch = self.peek()?;
    Some(&self.whole_input[start.0..self.position.0 + ch.len_utf8()])
  }

  pub fn consume_spaces(&mut self) {
    while self.peek().is_some_and(char::is_whitespace) {
      self.advance_char();
    }
  }
}

/// Tokenizes a whole expression. The result is enclosed in an outer
/// group.
pub fn tokenize(input: &str) -> Result<InfixExpr, LexError> {
  let mut state = TokenizerState::new(input);
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    if state.is_eof() {
      break;
    }
    let token = read_one_token(&mut state)?;
    trace!("token {token} ending at {}", state.current_pos());
    tokens.push(token);
  }
  Ok(InfixExpr::enclosed(tokens))
}

pub fn read_one_token(state: &mut TokenizerState<'_>) -> Result<Token, LexError> {
  let pos = state.current_pos();
  match state.peek() {
    None => Err(LexError::UnexpectedEOF(pos)),
    Some(ch) => {
      if is_number_start(ch) {
        read_number_literal(state)
      } else if is_identifier_start(ch) {
        Ok(read_identifier(state))
      } else if ch.is_ascii_punctuation() {
        read_operator(state)
      } else {
        Err(LexError::UnexpectedChar(ch, pos))
      }
    }
  }
}

/// True if `text` is, in its entirety, a numeric literal.
pub fn is_number(text: &str) -> bool {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap());
  RE.is_match(text)
}

fn is_number_start(ch: char) -> bool {
  ch.is_ascii_digit() || ch == '.'
}

fn is_identifier_start(ch: char) -> bool {
  ch.is_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

/// Reads a one-character operator. Any other ASCII punctuation is an
/// unknown operator.
fn read_operator(state: &mut TokenizerState<'_>) -> Result<Token, LexError> {
  let start = state.current_pos();
  state.advance_char();
  let text = state.since(start);
  OperatorKind::from_symbol(text)
    .map(Token::Operator)
    .ok_or_else(|| LexError::UnknownOperator(text.to_owned(), Span::new(start, state.current_pos())))
}

fn read_number_literal(state: &mut TokenizerState<'_>) -> Result<Token, LexError> {
  let start = state.current_pos();
  state.advance_char();
  while let Some(candidate) = state.since_with_lookahead(start) {
    if !is_number(candidate) {
      break;
    }
    state.advance_char();
  }

  let text = state.since(start);
  let span = Span::new(start, state.current_pos());
  // A lone `.` passes the lookahead test only when followed by a digit.
  if !is_number(text) {
    return Err(LexError::MalformedNumber(text.to_owned(), span));
  }
  text.parse::<f64>()
    .map(Token::Number)
    .map_err(|_| LexError::MalformedNumber(text.to_owned(), span))
}

/// Reads an identifier. If the identifier read so far spells an
/// operator keyword, the keyword wins immediately, so `divx` reads as
/// `div` followed by `x` and `neg5` as `neg` followed by `5`.
fn read_identifier(state: &mut TokenizerState<'_>) -> Token {
  let start = state.current_pos();
  state.advance_char();
  loop {
    let text = state.since(start);
    if let Some(kind) = OperatorKind::from_keyword(text) {
      return Token::Operator(kind);
    }
    match state.peek() {
      Some(ch) if is_identifier_continue(ch) => {
        state.advance_char();
      }
      _ => {
        return Token::variable(text);
      }
    }
  }
}
