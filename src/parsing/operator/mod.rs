
//! The closed set of operators understood by the expression compiler.

mod precedence;
mod associativity;

pub use precedence::Precedence;
pub use associativity::Associativity;

use crate::mode::CompileMode;
use crate::parsing::source::{SourceOffset, Span};
use crate::parsing::tokenizer::LexError;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Every operator token normalizes to exactly one of these kinds.
/// Grouping operators only exist between tokenizing and postfix
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
  Neg,
  Add,
  Sub,
  Mul,
  Div,
  Pow,
  LeftParen,
  RightParen,
}

/// Alphabetic spellings of operators which the tokenizer recognizes
/// inside identifier runs. Every canonical name is a keyword, plus the
/// `truediv` alias of `div`.
pub const KEYWORDS: &[(&str, OperatorKind)] = &[
  ("neg", OperatorKind::Neg),
  ("add", OperatorKind::Add),
  ("sub", OperatorKind::Sub),
  ("mul", OperatorKind::Mul),
  ("div", OperatorKind::Div),
  ("truediv", OperatorKind::Div),
  ("pow", OperatorKind::Pow),
];

impl OperatorKind {
  pub const ALL: [OperatorKind; 8] = [
    OperatorKind::Neg,
    OperatorKind::Add,
    OperatorKind::Sub,
    OperatorKind::Mul,
    OperatorKind::Div,
    OperatorKind::Pow,
    OperatorKind::LeftParen,
    OperatorKind::RightParen,
  ];

  /// The single-character operator spelled by `ch`, if any. `neg` has
  /// no character of its own; it is written `-` and disambiguated
  /// during postfix conversion.
  pub fn from_char(ch: char) -> Option<OperatorKind> {
    match ch {
      '+' => Some(OperatorKind::Add),
      '-' => Some(OperatorKind::Sub),
      '*' => Some(OperatorKind::Mul),
      '/' => Some(OperatorKind::Div),
      '^' => Some(OperatorKind::Pow),
      '(' => Some(OperatorKind::LeftParen),
      ')' => Some(OperatorKind::RightParen),
      _ => None,
    }
  }

  pub fn from_keyword(word: &str) -> Option<OperatorKind> {
    KEYWORDS.iter().find(|(kw, _)| *kw == word).map(|(_, kind)| *kind)
  }

  /// Normalizes an operator as written, either a single-character
  /// symbol or a keyword, to its kind.
  pub fn from_symbol(symbol: &str) -> Option<OperatorKind> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
      (Some(ch), None) => OperatorKind::from_char(ch),
      _ => OperatorKind::from_keyword(symbol),
    }
  }

  /// The symbol this operator is displayed with.
  pub fn symbol(self) -> &'static str {
    match self {
      OperatorKind::Neg => "neg",
      OperatorKind::Add => "+",
      OperatorKind::Sub => "-",
      OperatorKind::Mul => "*",
      OperatorKind::Div => "/",
      OperatorKind::Pow => "^",
      OperatorKind::LeftParen => "(",
      OperatorKind::RightParen => ")",
    }
  }

  /// The canonical alphabetic name of the operator. Grouping
  /// operators are their own names.
  pub fn name(self) -> &'static str {
    match self {
      OperatorKind::Neg => "neg",
      OperatorKind::Add => "add",
      OperatorKind::Sub => "sub",
      OperatorKind::Mul => "mul",
      OperatorKind::Div => "div",
      OperatorKind::Pow => "pow",
      OperatorKind::LeftParen => "(",
      OperatorKind::RightParen => ")",
    }
  }

  /// Number of operands consumed. Zero for grouping operators.
  pub fn arity(self) -> usize {
    match self {
      OperatorKind::Neg => 1,
      OperatorKind::Add | OperatorKind::Sub | OperatorKind::Mul | OperatorKind::Div | OperatorKind::Pow => 2,
      OperatorKind::LeftParen | OperatorKind::RightParen => 0,
    }
  }

  pub fn is_grouping(self) -> bool {
    matches!(self, OperatorKind::LeftParen | OperatorKind::RightParen)
  }

  pub fn is_prefix(self) -> bool {
    self.arity() == 1
  }

  pub fn precedence(self) -> Precedence {
    match self {
      OperatorKind::Neg => Precedence::PREFIX,
      OperatorKind::LeftParen | OperatorKind::RightParen => Precedence::GROUPING,
      OperatorKind::Pow => Precedence::POWER,
      OperatorKind::Mul | OperatorKind::Div => Precedence::MULTIPLICATIVE,
      OperatorKind::Add | OperatorKind::Sub => Precedence::ADDITIVE,
    }
  }

  /// Every operator groups to the left, `pow` included, unless `mode`
  /// asks for right-associative powers.
  pub fn associativity(self, mode: &CompileMode) -> Associativity {
    if self == OperatorKind::Pow && mode.has_right_assoc_power_flag() {
      Associativity::RIGHT
    } else {
      Associativity::LEFT
    }
  }

  /// The arithmetic performed by a binary operator, or `None` if
  /// `self` is not binary.
  pub fn binary_fn(self) -> Option<fn(f64, f64) -> f64> {
    match self {
      OperatorKind::Add => Some(|left, right| left + right),
      OperatorKind::Sub => Some(|left, right| left - right),
      OperatorKind::Mul => Some(|left, right| left * right),
      OperatorKind::Div => Some(|left, right| left / right),
      OperatorKind::Pow => Some(f64::powf),
      OperatorKind::Neg | OperatorKind::LeftParen | OperatorKind::RightParen => None,
    }
  }

  /// The arithmetic performed by a unary operator, or `None` if `self`
  /// is not unary.
  pub fn unary_fn(self) -> Option<fn(f64) -> f64> {
    match self {
      OperatorKind::Neg => Some(|arg| -arg),
      OperatorKind::Add | OperatorKind::Sub | OperatorKind::Mul | OperatorKind::Div | OperatorKind::Pow |
      OperatorKind::LeftParen | OperatorKind::RightParen => None,
    }
  }
}

/// Accepts symbols and keywords. The error span covers the whole
/// string.
impl FromStr for OperatorKind {
  type Err = LexError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OperatorKind::from_symbol(s).ok_or_else(|| {
      LexError::UnknownOperator(s.to_owned(), Span::new(SourceOffset(0), SourceOffset(s.len())))
    })
  }
}

impl Display for OperatorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
