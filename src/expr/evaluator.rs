
//! Stack machine for postfix token sequences.

use super::Token;
use crate::error::Error;
use crate::parsing::operator::OperatorKind;
use crate::parsing::shunting_yard::SyntaxError;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArityError {
  #[error("Operator '{operator}' expects {expected} operands, but the stack holds {found}")]
  MissingOperands {
    operator: OperatorKind,
    expected: usize,
    found: usize,
  },
  #[error("Argument count mismatch: expected {expected}, got {actual}")]
  ArgumentCountMismatch {
    expected: usize,
    actual: usize,
  },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unbound variable '{name}'")]
pub struct UnboundVariableError {
  pub name: String,
}

/// Reduces a postfix sequence with no variables to a single value.
pub fn evaluate(postfix: &[Token]) -> Result<f64, Error> {
  evaluate_with(postfix, |_| None)
}

/// Reduces a postfix sequence to a single value. The variable at token
/// index `i` takes the value `lookup(i)`; `None` leaves it unbound.
pub fn evaluate_with<F>(postfix: &[Token], mut lookup: F) -> Result<f64, Error>
where F: FnMut(usize) -> Option<f64> {
  let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
  for (index, token) in postfix.iter().enumerate() {
    match token {
      Token::Number(n) => {
        stack.push(*n);
      }
      Token::Variable(name) => {
        let value = lookup(index).ok_or_else(|| UnboundVariableError { name: name.clone() })?;
        stack.push(value);
      }
      Token::Operator(op) => {
        let value = apply_operator(&mut stack, *op)?;
        stack.push(value);
      }
    }
  }
  match stack.as_slice() {
    [] => Err(SyntaxError::EmptyExpression.into()),
    [value] => Ok(*value),
    values => Err(SyntaxError::UnresolvedExpression { remaining: values.len() }.into()),
  }
}

fn apply_operator(stack: &mut Vec<f64>, op: OperatorKind) -> Result<f64, Error> {
  let missing = ArityError::MissingOperands {
    operator: op,
    expected: op.arity(),
    found: stack.len(),
  };
  if let Some(f) = op.unary_fn() {
    let arg = stack.pop().ok_or(missing)?;
    Ok(f(arg))
  } else if let Some(f) = op.binary_fn() {
    // The right operand is on top.
    let right = stack.pop().ok_or_else(|| missing.clone())?;
    let left = stack.pop().ok_or(missing)?;
    Ok(f(left, right))
  } else {
    Err(SyntaxError::StrayParenthesis.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn num(n: f64) -> Token {
    Token::Number(n)
  }

  fn op(kind: OperatorKind) -> Token {
    Token::Operator(kind)
  }

  #[test]
  fn test_single_literal() {
    assert_eq!(evaluate(&[num(4.5)]), Ok(4.5));
  }

  #[test]
  fn test_operand_order() {
    assert_eq!(evaluate(&[num(10.0), num(4.0), op(OperatorKind::Sub)]), Ok(6.0));
    assert_eq!(evaluate(&[num(1.0), num(4.0), op(OperatorKind::Div)]), Ok(0.25));
    assert_eq!(evaluate(&[num(2.0), num(5.0), op(OperatorKind::Pow)]), Ok(32.0));
  }

  #[test]
  fn test_nested() {
    // (2 + 3) * -4
    let tokens = [
      num(2.0), num(3.0), op(OperatorKind::Add), num(4.0), op(OperatorKind::Neg), op(OperatorKind::Mul),
    ];
    assert_eq!(evaluate(&tokens), Ok(-20.0));
  }

  #[test]
  fn test_fractional_power() {
    let value = evaluate(&[num(2.0), num(0.5), op(OperatorKind::Pow)]).unwrap();
    assert_abs_diff_eq!(value, std::f64::consts::SQRT_2, epsilon = 1e-12);
  }

  #[test]
  fn test_division_by_zero_is_not_an_error() {
    assert_eq!(evaluate(&[num(1.0), num(0.0), op(OperatorKind::Div)]), Ok(f64::INFINITY));
    assert_eq!(evaluate(&[num(-1.0), num(0.0), op(OperatorKind::Div)]), Ok(f64::NEG_INFINITY));
    assert!(evaluate(&[num(0.0), num(0.0), op(OperatorKind::Div)]).unwrap().is_nan());
  }

  #[test]
  fn test_negative_base_fractional_exponent() {
    assert!(evaluate(&[num(-2.0), num(0.5), op(OperatorKind::Pow)]).unwrap().is_nan());
  }

  #[test]
  fn test_missing_binary_operand() {
    assert_eq!(
      evaluate(&[num(1.0), op(OperatorKind::Add)]),
      Err(Error::Arity(ArityError::MissingOperands { operator: OperatorKind::Add, expected: 2, found: 1 })),
    );
  }

  #[test]
  fn test_missing_unary_operand() {
    assert_eq!(
      evaluate(&[op(OperatorKind::Neg)]),
      Err(Error::Arity(ArityError::MissingOperands { operator: OperatorKind::Neg, expected: 1, found: 0 })),
    );
  }

  #[test]
  fn test_unbound_variable() {
    assert_eq!(
      evaluate(&[num(1.0), Token::variable("x"), op(OperatorKind::Add)]),
      Err(Error::UnboundVariable(UnboundVariableError { name: String::from("x") })),
    );
  }

  #[test]
  fn test_evaluate_with_lookup() {
    // x y - x *
    let tokens = [
      Token::variable("x"), Token::variable("y"), op(OperatorKind::Sub), Token::variable("x"), op(OperatorKind::Mul),
    ];
    let values = [Some(5.0), Some(2.0), None, Some(5.0), None];
    assert_eq!(evaluate_with(&tokens, |index| values[index]), Ok(15.0));
    assert_eq!(
      evaluate_with(&tokens, |index| if index == 1 { None } else { values[index] }),
      Err(Error::UnboundVariable(UnboundVariableError { name: String::from("y") })),
    );
  }

  #[test]
  fn test_leftover_operands() {
    assert_eq!(
      evaluate(&[num(2.0), num(3.0)]),
      Err(Error::Syntax(SyntaxError::UnresolvedExpression { remaining: 2 })),
    );
  }

  #[test]
  fn test_empty() {
    assert_eq!(evaluate(&[]), Err(Error::Syntax(SyntaxError::EmptyExpression)));
  }

  #[test]
  fn test_stray_parenthesis() {
    assert_eq!(
      evaluate(&[num(1.0), op(OperatorKind::LeftParen)]),
      Err(Error::Syntax(SyntaxError::StrayParenthesis)),
    );
  }
}
