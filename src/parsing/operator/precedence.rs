
/// The precedence group of an operator. Groups compare by binding
/// strength, so `Precedence::PREFIX` is the greatest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  /// `add` and `sub`.
  pub const ADDITIVE: Precedence = Precedence(10);
  /// `mul` and `div`.
  pub const MULTIPLICATIVE: Precedence = Precedence(20);
  /// `pow`.
  pub const POWER: Precedence = Precedence(30);
  /// Parentheses. A grouping operator on the stack is never popped by
  /// precedence, only by its matching close, so this value is nominal.
  pub const GROUPING: Precedence = Precedence(40);
  /// Unary prefix operators (`neg`).
  pub const PREFIX: Precedence = Precedence(50);
}
