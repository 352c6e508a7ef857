
use crate::expr::evaluator::{ArityError, UnboundVariableError};
use crate::parsing::shunting_yard::SyntaxError;
use crate::parsing::tokenizer::LexError;

use thiserror::Error;

/// Any failure while compiling or calling an expression.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Lex(#[from] LexError),
  #[error("{0}")]
  Syntax(#[from] SyntaxError),
  #[error("{0}")]
  Arity(#[from] ArityError),
  #[error("{0}")]
  UnboundVariable(#[from] UnboundVariableError),
}

impl Error {
  /// True if this error can only arise while compiling, as opposed to
  /// while calling a compiled function.
  pub fn is_compile_error(&self) -> bool {
    matches!(
      self,
      Error::Lex(_) | Error::Syntax(SyntaxError::UnmatchedRightParen { .. } | SyntaxError::UnclosedLeftParen { .. }),
    )
  }
}
