
//! Compiles infix math expressions such as `(1/9x)^2` into reusable
//! numeric functions, for sampling `y = f(x)` once per pixel column
//! of a plot.
//!
//! ```text
//! tokenize -> to_postfix -> bind -> CompiledFunction::call (evaluate)
//! ```

pub mod error;
pub mod expr;
pub mod graphics;
pub mod mode;
pub mod parsing;

pub use error::Error;
pub use expr::function::{calculate, compile, CompiledFunction, Compiler};
pub use mode::CompileMode;
