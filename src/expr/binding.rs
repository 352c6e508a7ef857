
//! Positional binding of variables in a postfix expression.

use super::{PostfixExpr, Token};

use std::collections::HashMap;

/// A variable of a compiled expression, together with the argument
/// position it reads from and every token index it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundVariable {
  pub name: String,
  pub position: usize,
  pub occurrences: Vec<usize>,
}

/// The variables of an expression, indexed both by name and by
/// position. Positions are `0..len()`, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBinding {
  variables: Vec<BoundVariable>,
  by_name: HashMap<String, usize>,
}

/// Binds every distinct variable in `postfix` to the next free
/// argument position.
pub fn bind(postfix: &PostfixExpr) -> VariableBinding {
  let mut binding = VariableBinding::default();
  for (index, token) in postfix.tokens().iter().enumerate() {
    if let Token::Variable(name) = token {
      binding.record(name, index);
    }
  }
  binding
}

impl VariableBinding {
  fn record(&mut self, name: &str, index: usize) {
    match self.by_name.get(name) {
      Some(&position) => {
        self.variables[position].occurrences.push(index);
      }
      None => {
        let position = self.variables.len();
        self.by_name.insert(name.to_owned(), position);
        self.variables.push(BoundVariable {
          name: name.to_owned(),
          position,
          occurrences: vec![index],
        });
      }
    }
  }

  /// Number of distinct variables.
  pub fn len(&self) -> usize {
    self.variables.len()
  }

  pub fn is_empty(&self) -> bool {
    self.variables.is_empty()
  }

  pub fn get(&self, name: &str) -> Option<&BoundVariable> {
    self.by_name.get(name).map(|&position| &self.variables[position])
  }

  pub fn position_of(&self, name: &str) -> Option<usize> {
    self.by_name.get(name).copied()
  }

  /// Variables in position order.
  pub fn iter(&self) -> impl Iterator<Item = &BoundVariable> {
    self.variables.iter()
  }

  /// Variable names in position order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.variables.iter().map(|v| v.name.as_str())
  }
}

impl<'a> IntoIterator for &'a VariableBinding {
  type Item = &'a BoundVariable;
  type IntoIter = std::slice::Iter<'a, BoundVariable>;

  fn into_iter(self) -> Self::IntoIter {
    self.variables.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::OperatorKind;

  fn postfix(tokens: Vec<Token>) -> PostfixExpr {
    PostfixExpr::new(tokens)
  }

  #[test]
  fn test_no_variables() {
    let binding = bind(&postfix(vec![Token::Number(1.0)]));
    assert!(binding.is_empty());
    assert_eq!(binding.len(), 0);
  }

  #[test]
  fn test_first_occurrence_order() {
    // y x +
    let binding = bind(&postfix(vec![
      Token::variable("y"),
      Token::variable("x"),
      Token::Operator(OperatorKind::Add),
    ]));
    assert_eq!(binding.names().collect::<Vec<_>>(), vec!["y", "x"]);
    assert_eq!(binding.position_of("y"), Some(0));
    assert_eq!(binding.position_of("x"), Some(1));
    assert_eq!(binding.position_of("z"), None);
  }

  #[test]
  fn test_repeated_occurrences() {
    // x x * y x + *
    let binding = bind(&postfix(vec![
      Token::variable("x"),
      Token::variable("x"),
      Token::Operator(OperatorKind::Mul),
      Token::variable("y"),
      Token::variable("x"),
      Token::Operator(OperatorKind::Add),
      Token::Operator(OperatorKind::Mul),
    ]));
    assert_eq!(binding.len(), 2);
    assert_eq!(
      binding.get("x"),
      Some(&BoundVariable { name: String::from("x"), position: 0, occurrences: vec![0, 1, 4] }),
    );
    assert_eq!(
      binding.get("y"),
      Some(&BoundVariable { name: String::from("y"), position: 1, occurrences: vec![3] }),
    );
  }

  #[test]
  fn test_positions_are_contiguous() {
    let binding = bind(&postfix(vec![
      Token::variable("c"),
      Token::variable("a"),
      Token::variable("c"),
      Token::variable("b"),
    ]));
    let positions: Vec<_> = binding.iter().map(|v| v.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
  }
}
