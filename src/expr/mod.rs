
//! Token sequences and the stages that turn them into callable
//! functions.

pub mod binding;
pub mod evaluator;
pub mod function;

use crate::parsing::operator::OperatorKind;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
  Number(f64),
  Variable(String),
  Operator(OperatorKind),
}

/// An expression in infix form, always enclosed in an outer pair of
/// parentheses. The outer group lets the postfix converter detect a
/// closing parenthesis that has no partner in the original input.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
  tokens: Vec<Token>,
}

/// An expression in postfix form. Contains no grouping operators when
/// produced by the postfix converter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostfixExpr {
  tokens: Vec<Token>,
}

impl Token {
  pub fn variable(name: impl Into<String>) -> Self {
    Token::Variable(name.into())
  }
}

impl InfixExpr {
  /// Wraps `inner` in the outer group.
  pub fn enclosed(inner: impl IntoIterator<Item = Token>) -> Self {
    let tokens = std::iter::once(Token::Operator(OperatorKind::LeftParen))
      .chain(inner)
      .chain(std::iter::once(Token::Operator(OperatorKind::RightParen)))
      .collect();
    Self { tokens }
  }

  /// All tokens, outer group included.
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  /// The tokens inside the outer group.
  pub fn inner_tokens(&self) -> &[Token] {
    &self.tokens[1..self.tokens.len() - 1]
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner_tokens().is_empty()
  }
}

impl PostfixExpr {
  pub fn new(tokens: Vec<Token>) -> Self {
    Self { tokens }
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{n}"),
      Token::Variable(name) => write!(f, "{name}"),
      Token::Operator(op) => write!(f, "{op}"),
    }
  }
}

impl Display for InfixExpr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens.iter().join(" "))
  }
}

impl Display for PostfixExpr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens.iter().join(" "))
  }
}
