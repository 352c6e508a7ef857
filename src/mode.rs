
use bitflags::bitflags;

/// Flags adjusting how expressions are compiled and called. Every
/// flag is off by default, and the default mode is the standard
/// contract of the compiler.
///
/// This structure is cheap to copy and its representation is
/// private.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileMode {
  inner: CompileModeBits,
}

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  struct CompileModeBits: u8 {
    const RIGHT_ASSOC_POWER = 0b0001;
    const STRICT_ARGUMENTS = 0b0010;
    const NO_IMPLICIT_MULTIPLICATION = 0b0100;
  }
}

impl CompileMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// Off by default, in which case `pow` is left-associative like
  /// every other operator and `2^3^2` is `(2^3)^2`. When on, `pow`
  /// groups to the right instead.
  pub fn has_right_assoc_power_flag(&self) -> bool {
    self.inner.contains(CompileModeBits::RIGHT_ASSOC_POWER)
  }

  pub fn set_right_assoc_power_flag(&mut self, mode: bool) {
    self.inner.set(CompileModeBits::RIGHT_ASSOC_POWER, mode);
  }

  /// Off by default, in which case a compiled function silently
  /// ignores arguments past the number of variables it binds. When
  /// on, extra arguments are an arity error.
  pub fn has_strict_arguments_flag(&self) -> bool {
    self.inner.contains(CompileModeBits::STRICT_ARGUMENTS)
  }

  pub fn set_strict_arguments_flag(&mut self, mode: bool) {
    self.inner.set(CompileModeBits::STRICT_ARGUMENTS, mode);
  }

  /// Off by default, in which case a variable directly after a number
  /// or a closing parenthesis is multiplied by it (`2x`, `(x+1)y`).
  pub fn has_no_implicit_multiplication_flag(&self) -> bool {
    self.inner.contains(CompileModeBits::NO_IMPLICIT_MULTIPLICATION)
  }

  pub fn set_no_implicit_multiplication_flag(&mut self, mode: bool) {
    self.inner.set(CompileModeBits::NO_IMPLICIT_MULTIPLICATION, mode);
  }
}
