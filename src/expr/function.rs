
//! Compilation of expression strings into callable functions.

use super::PostfixExpr;
use super::binding::{bind, VariableBinding};
use super::evaluator::{evaluate_with, ArityError};
use crate::error::Error;
use crate::mode::CompileMode;
use crate::parsing::shunting_yard::to_postfix;
use crate::parsing::tokenizer::tokenize;

use log::debug;

/// Runs the compilation pipeline under a fixed [`CompileMode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler {
  mode: CompileMode,
}

/// An expression compiled to postfix form with its variables bound to
/// argument positions.
///
/// A `CompiledFunction` is immutable. Calls read the postfix sequence
/// and substitute arguments on the fly, so one function may be called
/// from several threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
  source: String,
  postfix: PostfixExpr,
  binding: VariableBinding,
  /// For each postfix token, the argument position it reads from, if
  /// it is a variable.
  argument_slots: Vec<Option<usize>>,
  mode: CompileMode,
}

/// Compiles `expression` under the default mode.
pub fn compile(expression: &str) -> Result<CompiledFunction, Error> {
  Compiler::default().compile(expression)
}

/// Compiles and evaluates an expression with no variables.
pub fn calculate(expression: &str) -> Result<f64, Error> {
  compile(expression)?.call(&[])
}

impl Compiler {
  pub fn new(mode: CompileMode) -> Self {
    Self { mode }
  }

  pub fn mode(&self) -> &CompileMode {
    &self.mode
  }

  pub fn compile(&self, expression: &str) -> Result<CompiledFunction, Error> {
    let infix = tokenize(expression)?;
    let postfix = to_postfix(&infix, &self.mode)?;
    let binding = bind(&postfix);
    let mut argument_slots = vec![None; postfix.len()];
    for variable in &binding {
      for &index in &variable.occurrences {
        argument_slots[index] = Some(variable.position);
      }
    }
    debug!("compiled {expression:?} to `{postfix}` with {} variable(s)", binding.len());
    Ok(CompiledFunction {
      source: expression.to_owned(),
      postfix,
      binding,
      argument_slots,
      mode: self.mode,
    })
  }
}

impl CompiledFunction {
  /// Evaluates the function. `args[i]` is substituted for the variable
  /// at position `i`. Arguments past the number of variables are
  /// ignored unless the function was compiled in strict-arguments
  /// mode.
  pub fn call(&self, args: &[f64]) -> Result<f64, Error> {
    let expected = self.arity();
    if args.len() < expected || (self.mode.has_strict_arguments_flag() && args.len() > expected) {
      return Err(ArityError::ArgumentCountMismatch { expected, actual: args.len() }.into());
    }
    evaluate_with(self.postfix.tokens(), |index| self.argument_slots[index].map(|position| args[position]))
  }

  /// Number of distinct variables, which is the minimum number of
  /// arguments to [`CompiledFunction::call`].
  pub fn arity(&self) -> usize {
    self.binding.len()
  }

  /// Variable names in argument order.
  pub fn variables(&self) -> impl Iterator<Item = &str> {
    self.binding.names()
  }

  pub fn binding(&self) -> &VariableBinding {
    &self.binding
  }

  pub fn postfix(&self) -> &PostfixExpr {
    &self.postfix
  }

  /// The expression string this function was compiled from.
  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn mode(&self) -> &CompileMode {
    &self.mode
  }
}
