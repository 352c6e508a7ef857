
//! Support for sampling compiled functions into plot data. Drawing
//! the samples is left to the caller.

pub mod dataset;
pub mod plot;
pub mod point;
