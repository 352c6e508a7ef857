
//! Structures for generating the x values a curve is sampled at.

use thiserror::Error;

/// A dataset of input (independent) values for a curve.
///
/// Datasets can be enumerated explicitly or provided implicitly as
/// either an interval (a minimum and a maximum) or a unit step (a
/// starting value and an implicit step size of 1).
#[derive(Debug, Clone, PartialEq)]
pub struct XDataSet {
  data: XDataSetImpl,
}

#[derive(Debug, Clone, PartialEq)]
enum XDataSetImpl {
  Vector(Vec<f64>),
  Interval { min: f64, max: f64 },
  Step(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Data set length mismatch (expected {expected}, got {actual})")]
pub struct LengthError {
  expected: usize,
  actual: usize,
}

impl XDataSet {
  pub const STEP_DATA_POINTS: usize = 30;
  /// Preferred length of an interval, and the most pixel columns
  /// sampled for one curve.
  pub const INTERVAL_DATA_POINTS: usize = 1000;

  /// An enumerated data set, consisting of exactly the indicated
  /// points.
  pub fn enumerated(vec: Vec<f64>) -> Self {
    Self { data: XDataSetImpl::Vector(vec) }
  }

  /// An interval data set, consisting of points evenly spaced from
  /// `min` to `max`. Both bounds are inclusive, except in corner cases
  /// where the length of the requested data set is less than 2.
  ///
  /// Panics if `min > max` or either bound is NaN.
  pub fn interval(min: f64, max: f64) -> Self {
    assert!(min <= max, "Invalid interval ({min} .. {max})");
    Self { data: XDataSetImpl::Interval { min, max } }
  }

  /// The x values of the horizontal pixel columns of a viewport
  /// `width` pixels wide, spanning `min` to `max` in graph
  /// coordinates. Every column is sampled when there are at most
  /// `INTERVAL_DATA_POINTS` of them; wider viewports sample every n-th
  /// column, starting from the first, so that no more than
  /// `INTERVAL_DATA_POINTS` values are produced.
  ///
  /// Panics if `min > max` or either bound is NaN.
  pub fn pixel_columns(min: f64, max: f64, width: usize) -> Self {
    assert!(min <= max, "Invalid interval ({min} .. {max})");
    let stride = width.div_ceil(Self::INTERVAL_DATA_POINTS).max(1);
    let columns = XDataSet::gen_points_from_interval(min, max, width);
    Self::enumerated(columns.into_iter().step_by(stride).collect())
  }

  /// A data set which starts at `starting` and increments by 1 for
  /// each subsequent point.
  pub fn step_from(starting: f64) -> Self {
    Self { data: XDataSetImpl::Step(starting) }
  }

  pub fn required_len(&self) -> Option<usize> {
    match &self.data {
      XDataSetImpl::Vector(v) => Some(v.len()),
      XDataSetImpl::Interval { .. } => None,
      XDataSetImpl::Step(_) => None,
    }
  }

  pub fn preferred_len(&self) -> usize {
    match &self.data {
      XDataSetImpl::Vector(v) => v.len(),
      XDataSetImpl::Interval { .. } => Self::INTERVAL_DATA_POINTS,
      XDataSetImpl::Step(_) => Self::STEP_DATA_POINTS,
    }
  }

  pub fn has_required_len(&self) -> bool {
    self.required_len().is_some()
  }

  pub fn gen_points(&self, requested_size: Option<usize>) -> Result<Vec<f64>, LengthError> {
    if let (Some(actual), Some(expected)) = (requested_size, self.required_len()) {
      if actual != expected {
        return Err(LengthError { expected, actual });
      }
    }

    let size = requested_size.unwrap_or_else(|| self.preferred_len());
    Ok(
      match &self.data {
        XDataSetImpl::Vector(v) => v.clone(),
        XDataSetImpl::Interval { min, max } => XDataSet::gen_points_from_interval(*min, *max, size),
        XDataSetImpl::Step(starting) => XDataSet::gen_points_from_step(*starting, size),
      },
    )
  }

  fn gen_points_from_interval(min: f64, max: f64, size: usize) -> Vec<f64> {
    // Corner cases for small sizes :)
    if size == 0 {
      return vec![];
    } else if size == 1 {
      return vec![min];
    }

    let step = (max - min) / (size - 1) as f64;
    (0..size)
      .map(|i| if i == size - 1 { max } else { min + i as f64 * step })
      .collect()
  }

  fn gen_points_from_step(starting: f64, size: usize) -> Vec<f64> {
    (0..size)
      .map(|i| starting + i as f64)
      .collect()
  }
}
