
//! Infix to postfix conversion via the shunting yard algorithm.

use super::operator::OperatorKind;
use crate::expr::{InfixExpr, PostfixExpr, Token};
use crate::mode::CompileMode;

use thiserror::Error;

/// A structural error in an expression. Token indices refer to the
/// enclosed infix sequence (so index 0 is the outer open
/// parenthesis).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
  #[error("Unbalanced parentheses: unmatched ')' at token {index}")]
  UnmatchedRightParen { index: usize },
  #[error("Unbalanced parentheses: unclosed '(' at token {index}")]
  UnclosedLeftParen { index: usize },
  #[error("Unresolved expression: {remaining} values left on the stack")]
  UnresolvedExpression { remaining: usize },
  #[error("Empty expression")]
  EmptyExpression,
  #[error("Parenthesis in postfix expression")]
  StrayParenthesis,
}

#[derive(Clone, Copy, Debug)]
struct OpStackValue {
  operator: OperatorKind,
  index: usize,
}

/// Converts an enclosed infix expression to postfix.
///
/// `-` is read as `neg` when it begins the expression or follows any
/// operator other than `)`. Unless disabled by `mode`, a variable
/// directly after a number or `)` is multiplied by it.
pub fn to_postfix(infix: &InfixExpr, mode: &CompileMode) -> Result<PostfixExpr, SyntaxError> {
  let tokens = infix.tokens();
  let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  let mut previous: Option<&Token> = None;

  for (index, token) in tokens.iter().enumerate() {
    match token {
      Token::Number(_) => {
        output.push(token.clone());
      }
      Token::Variable(_) => {
        if !mode.has_no_implicit_multiplication_flag() && is_implicit_multiplicand(previous) {
          push_operator(&mut output, &mut operator_stack, OpStackValue { operator: OperatorKind::Mul, index }, mode);
        }
        output.push(token.clone());
      }
      Token::Operator(OperatorKind::LeftParen) => {
        operator_stack.push(OpStackValue { operator: OperatorKind::LeftParen, index });
      }
      Token::Operator(OperatorKind::RightParen) => {
        close_group(&mut output, &mut operator_stack, index)?;
        // The outer group must be the last one closed.
        if operator_stack.is_empty() && index + 1 < tokens.len() {
          return Err(SyntaxError::UnmatchedRightParen { index });
        }
      }
      Token::Operator(op) => {
        let operator = if *op == OperatorKind::Sub && is_unary_position(previous) {
          OperatorKind::Neg
        } else {
          *op
        };
        push_operator(&mut output, &mut operator_stack, OpStackValue { operator, index }, mode);
      }
    }
    previous = Some(token);
  }

  // Pop and emit remaining operators.
  while let Some(stack_value) = operator_stack.pop() {
    if stack_value.operator.is_grouping() {
      return Err(SyntaxError::UnclosedLeftParen { index: stack_value.index });
    }
    output.push(Token::Operator(stack_value.operator));
  }

  Ok(PostfixExpr::new(output))
}

fn is_unary_position(previous: Option<&Token>) -> bool {
  match previous {
    None => true,
    Some(Token::Operator(op)) => *op != OperatorKind::RightParen,
    Some(_) => false,
  }
}

fn is_implicit_multiplicand(previous: Option<&Token>) -> bool {
  match previous {
    Some(Token::Number(_)) => true,
    Some(Token::Operator(op)) => *op == OperatorKind::RightParen,
    _ => false,
  }
}

/// Pops operators that bind at least as tightly as `current`, then
/// pushes `current`. Prefix operators have no left operand, so they
/// never pop anything.
fn push_operator(
  output: &mut Vec<Token>,
  operator_stack: &mut Vec<OpStackValue>,
  current: OpStackValue,
  mode: &CompileMode,
) {
  if !current.operator.is_prefix() {
    while let Some(stack_value) = operator_stack.pop() {
      if should_pop(stack_value.operator, current.operator, mode) {
        output.push(Token::Operator(stack_value.operator));
      } else {
        operator_stack.push(stack_value);
        break;
      }
    }
  }
  operator_stack.push(current);
}

fn should_pop(stack_op: OperatorKind, current_op: OperatorKind, mode: &CompileMode) -> bool {
  if stack_op.is_grouping() {
    return false;
  }
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity(mode).is_left_assoc())
}

fn close_group(
  output: &mut Vec<Token>,
  operator_stack: &mut Vec<OpStackValue>,
  index: usize,
) -> Result<(), SyntaxError> {
  loop {
    match operator_stack.pop() {
      None => {
        return Err(SyntaxError::UnmatchedRightParen { index });
      }
      Some(OpStackValue { operator: OperatorKind::LeftParen, .. }) => {
        return Ok(());
      }
      Some(stack_value) => {
        output.push(Token::Operator(stack_value.operator));
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::tokenizer::tokenize;

  fn postfix(input: &str) -> String {
    postfix_with(input, &CompileMode::new())
  }

  fn postfix_with(input: &str, mode: &CompileMode) -> String {
    let infix = tokenize(input).unwrap();
    to_postfix(&infix, mode).unwrap().to_string()
  }

  fn syntax_error(input: &str) -> SyntaxError {
    let infix = tokenize(input).unwrap();
    to_postfix(&infix, &CompileMode::new()).unwrap_err()
  }

  #[test]
  fn test_precedence() {
    assert_eq!(postfix("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
    assert_eq!(postfix("1-2*3+4"), "1 2 3 * - 4 +");
    assert_eq!(postfix("a+b^c*d"), "a b c ^ d * +");
  }

  #[test]
  fn test_left_assoc_op() {
    assert_eq!(postfix("1-2-3"), "1 2 - 3 -");
    assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
    assert_eq!(postfix("8/4*2"), "8 4 / 2 *");
  }

  #[test]
  fn test_power_is_left_assoc() {
    assert_eq!(postfix("2^3^2"), "2 3 ^ 2 ^");
  }

  #[test]
  fn test_power_right_assoc_mode() {
    let mut mode = CompileMode::new();
    mode.set_right_assoc_power_flag(true);
    assert_eq!(postfix_with("2^3^2", &mode), "2 3 2 ^ ^");
    assert_eq!(postfix_with("2*3^2^2", &mode), "2 3 2 2 ^ ^ *");
  }

  #[test]
  fn test_parentheses() {
    assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix("2*(3+4)"), "2 3 4 + *");
    assert_eq!(postfix("((1))"), "1");
    assert_eq!(postfix("2^(1-3)"), "2 1 3 - ^");
  }

  #[test]
  fn test_unary_minus() {
    assert_eq!(postfix("-5 - 1"), "5 neg 1 -");
    assert_eq!(postfix("2*-3"), "2 3 neg *");
    assert_eq!(postfix("(-x)"), "x neg");
    assert_eq!(postfix("2^-1"), "2 1 neg ^");
    assert_eq!(postfix("--5"), "5 neg neg");
  }

  #[test]
  fn test_neg_binds_tighter_than_power() {
    assert_eq!(postfix("-2^2"), "2 neg 2 ^");
  }

  #[test]
  fn test_minus_after_close_paren_is_binary() {
    assert_eq!(postfix("(x+1)-2"), "x 1 + 2 -");
  }

  #[test]
  fn test_implicit_multiplication() {
    assert_eq!(postfix("2x"), "2 x *");
    assert_eq!(postfix("(1/9x)^2"), "1 9 / x * 2 ^");
    assert_eq!(postfix("(x+1)y"), "x 1 + y *");
    assert_eq!(postfix("x^2+2x"), "x 2 ^ 2 x * +");
    assert_eq!(postfix("1+x"), "1 x +");
  }

  #[test]
  fn test_no_implicit_multiplication_between_numbers() {
    assert_eq!(postfix("2 3"), "2 3");
  }

  #[test]
  fn test_implicit_multiplication_disabled() {
    let mut mode = CompileMode::new();
    mode.set_no_implicit_multiplication_flag(true);
    assert_eq!(postfix_with("2x", &mode), "2 x");
  }

  #[test]
  fn test_variable_order_is_preserved() {
    assert_eq!(postfix("y + x"), "y x +");
  }

  #[test]
  fn test_empty() {
    assert_eq!(postfix(""), "");
    assert_eq!(postfix("()"), "");
  }

  #[test]
  fn test_unclosed_paren() {
    // The final `)` closes the inner group, leaving the outer one open.
    assert_eq!(syntax_error("(2+3"), SyntaxError::UnclosedLeftParen { index: 0 });
    assert!(matches!(syntax_error("((x)"), SyntaxError::UnclosedLeftParen { .. }));
  }

  #[test]
  fn test_unmatched_paren() {
    assert_eq!(syntax_error("2+3)"), SyntaxError::UnmatchedRightParen { index: 4 });
    assert_eq!(syntax_error("2)+(3"), SyntaxError::UnmatchedRightParen { index: 2 });
  }

  #[test]
  fn test_unmatched_paren_in_unenclosed_position() {
    let infix = InfixExpr::enclosed(vec![
      Token::Operator(OperatorKind::RightParen),
      Token::Operator(OperatorKind::RightParen),
    ]);
    assert_eq!(
      to_postfix(&infix, &CompileMode::new()),
      Err(SyntaxError::UnmatchedRightParen { index: 1 }),
    );
  }
}
