
//! Sampling compiled functions into two-dimensional plots.

use crate::expr::function::CompiledFunction;
use super::dataset::{XDataSet, LengthError};
use super::point::Point2D;

use serde::Serialize;
use log::trace;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDirective {
  pub points: Vec<Point2D>,
}

impl PlotDirective {
  pub fn empty() -> PlotDirective {
    PlotDirective { points: Vec::new() }
  }

  pub fn from_points(x_dataset: &XDataSet, y_points: &[f64]) -> Result<PlotDirective, LengthError> {
    let x_points = x_dataset.gen_points(Some(y_points.len()))?;
    let points = x_points.into_iter().zip(y_points).map(|(x, y)| Point2D { x, y: *y }).collect();
    Ok(PlotDirective {
      points,
    })
  }

  /// Calls `y_function` once per x value, passing x as the sole
  /// argument. Samples where the call fails are left out of the plot.
  pub fn from_compiled_function(
    x_dataset: &XDataSet,
    y_function: &CompiledFunction,
  ) -> Result<PlotDirective, LengthError> {
    let x_points = x_dataset.gen_points(None)?;
    let points = x_points.into_iter().filter_map(|x| {
      match y_function.call(&[x]) {
        Ok(y) => Some(Point2D { x, y }),
        Err(err) => {
          trace!("skipping sample of {:?} at x = {x}: {err}", y_function.source());
          None
        }
      }
    }).collect();
    Ok(PlotDirective {
      points,
    })
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }
}
