
use serde::Serialize;

use std::fmt::{self, Display, Formatter};

/// A sampled point of a curve, in graph (not pixel) coordinates.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

impl Point2D {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
