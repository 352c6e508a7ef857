
/// The associativity of a binary operator, deciding how a chain of
/// operators from the same precedence group is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  left_assoc: bool,
}

impl Associativity {
  /// `a # b # c` is `(a # b) # c`.
  pub const LEFT: Associativity = Associativity {
    left_assoc: true,
  };
  /// `a # b # c` is `a # (b # c)`.
  pub const RIGHT: Associativity = Associativity {
    left_assoc: false,
  };

  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }

  pub const fn is_right_assoc(self) -> bool {
    !self.left_assoc
  }
}

impl Default for Associativity {
  fn default() -> Self {
    Associativity::LEFT
  }
}
