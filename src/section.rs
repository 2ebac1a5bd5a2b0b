//! Rectangular cross-section properties used for bending stress.

use serde::{Deserialize, Serialize};

use crate::errors::SectionError;

/// Solid rectangular cross-section measured in metres.
///
/// Bending is assumed about the horizontal centroidal axis, so `height` is the
/// dimension measured in the plane of the loads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectangularSection {
    /// Width `b` of the section.
    pub width: f64,
    /// Height `h` of the section.
    pub height: f64,
}

impl RectangularSection {
    /// Create a [`RectangularSection`] with explicit dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Cross-sectional area `b·h` in square metres.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Second moment of area `I = b·h³/12` about the centroidal axis.
    ///
    /// # Examples
    /// ```
    /// use beamx::rectangle;
    ///
    /// let section = rectangle(0.25, 0.45);
    /// assert!((section.second_moment_of_area() - 0.001_898_437_5).abs() < 1.0e-12);
    /// ```
    #[must_use]
    pub fn second_moment_of_area(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Distance `c = h/2` from the neutral axis to the extreme fibre.
    #[must_use]
    pub fn extreme_fibre_distance(&self) -> f64 {
        self.height / 2.0
    }

    /// Check that the section can carry a bending stress.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] naming the first degenerate dimension, or
    /// [`SectionError::NonPositiveSecondMoment`] when `I` underflows to zero.
    pub fn validate(&self) -> Result<(), SectionError> {
        if self.width.is_nan() || self.width <= 0.0 {
            return Err(SectionError::NonPositiveWidth { width: self.width });
        }
        if self.height.is_nan() || self.height <= 0.0 {
            return Err(SectionError::NonPositiveHeight {
                height: self.height,
            });
        }
        let second_moment = self.second_moment_of_area();
        if second_moment <= 0.0 {
            return Err(SectionError::NonPositiveSecondMoment { second_moment });
        }
        Ok(())
    }

    /// Elastic section modulus `S = I/c` in cubic metres.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] when the section is degenerate.
    pub fn elastic_section_modulus(&self) -> Result<f64, SectionError> {
        self.validate()?;
        Ok(self.second_moment_of_area() / self.extreme_fibre_distance())
    }
}

/// Convenience helper for creating [`RectangularSection`] instances.
///
/// # Examples
/// ```
/// use beamx::rectangle;
///
/// let section = rectangle(0.25, 0.45);
/// assert_eq!(section.extreme_fibre_distance(), 0.225);
/// ```
#[must_use]
pub const fn rectangle(width: f64, height: f64) -> RectangularSection {
    RectangularSection::new(width, height)
}
