//! Estimation result types

pub mod result;

pub use result::EstimationResult;
