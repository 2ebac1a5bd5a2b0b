//! Error types produced while describing or evaluating beams.

use thiserror::Error;

/// Error returned when a beam evaluation fails.
///
/// # Examples
///
/// ```
/// use beamx::{sample_beam, EvaluationError};
///
/// let error = sample_beam(6.0, 1).expect_err("a single sample cannot span a beam");
/// assert_eq!(error, EvaluationError::InvalidSampleCount { count: 1 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum EvaluationError {
    /// Returned when the span is zero, negative or not a finite number.
    #[error("span must be positive and finite (received {span})")]
    InvalidSpan {
        /// Rejected span in metres.
        span: f64,
    },
    /// Returned when the cross-section cannot carry a bending stress.
    #[error("invalid cross-section: {0}")]
    InvalidSection(#[from] SectionError),
    /// Returned when fewer than two sample points are requested.
    #[error("at least two sample points are required (received {count})")]
    InvalidSampleCount {
        /// Rejected number of samples.
        count: usize,
    },
}

/// Error returned when a rectangular cross-section is degenerate.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SectionError {
    /// Returned when the width is zero, negative or not a number.
    #[error("width must be positive (received {width})")]
    NonPositiveWidth {
        /// Rejected width in metres.
        width: f64,
    },
    /// Returned when the height is zero, negative or not a number.
    #[error("height must be positive (received {height})")]
    NonPositiveHeight {
        /// Rejected height in metres.
        height: f64,
    },
    /// Returned when the second moment of area is not strictly positive.
    #[error("second moment of area must be positive (received {second_moment})")]
    NonPositiveSecondMoment {
        /// Rejected second moment of area in metres to the fourth power.
        second_moment: f64,
    },
}

/// Error returned when a user-facing input lies outside its accepted range.
///
/// Inputs are checked at the presentation boundary, before any unit conversion,
/// so the reported value is in the units the user typed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when a value is outside the interval accepted for its field.
    #[error("{field} must lie in {range} (received {value})")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Accepted interval in interval notation.
        range: &'static str,
    },
    /// Returned when a value is NaN or infinite.
    #[error("{field} must be a finite number (received {value})")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when the number of sample points is outside its accepted range.
    #[error("points must lie in [{min}, {max}] (received {value})")]
    SampleCount {
        /// Rejected number of samples.
        value: usize,
        /// Smallest accepted number of samples.
        min: usize,
        /// Largest accepted number of samples.
        max: usize,
    },
}
