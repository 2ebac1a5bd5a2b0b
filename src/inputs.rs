//! Form-level inputs in display units and their conversion for the evaluator.

use serde::{Deserialize, Serialize};

use crate::beam::BeamConfig;
use crate::errors::InputError;
use crate::plot::PlotOptions;
use crate::section::RectangularSection;
use crate::units::{kilonewtons_per_metre_to_newtons_per_metre, kilonewtons_to_newtons};

/// Smallest number of sample points a front end offers.
pub const MIN_POINTS: usize = 50;
/// Largest number of sample points a front end offers.
pub const MAX_POINTS: usize = 5_000;

/// Beam parameters as entered on a form, with loads in kilo-units.
///
/// Missing fields take the defaults of the desktop viewer, so a partial JSON
/// document is a valid input file.
///
/// # Examples
/// ```
/// use beamx::BeamInputs;
///
/// let inputs: BeamInputs = serde_json::from_str(r#"{ "span_m": 10.0 }"#).expect("valid json");
/// assert_eq!(inputs.span_m, 10.0);
/// assert_eq!(inputs.points, 400);
/// let config = inputs.to_config();
/// assert!((config.distributed_load - 5_000.0).abs() < 1.0e-9);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamInputs {
    /// Span `L` in metres.
    pub span_m: f64,
    /// Point load `P` in kilonewtons.
    pub point_load_kn: f64,
    /// Position `a` of the point load from the left support in metres.
    pub position_m: f64,
    /// Full-span distributed load `w` in kilonewtons per metre.
    pub distributed_load_kn_per_m: f64,
    /// Section width `b` in metres.
    pub width_m: f64,
    /// Section depth `h` in metres.
    pub depth_m: f64,
    /// Number of sample points along the span.
    pub points: usize,
    /// Radius of the rendered beam tube in metres.
    pub tube_radius_m: f64,
    /// Exaggeration applied to the visual deflection shape.
    pub deflection_scale: f64,
    /// Whether to draw the exaggerated deflection shape.
    pub show_deflection: bool,
}

impl Default for BeamInputs {
    fn default() -> Self {
        Self {
            span_m: 6.0,
            point_load_kn: 20.0,
            position_m: 3.0,
            distributed_load_kn_per_m: 5.0,
            width_m: 0.25,
            depth_m: 0.45,
            points: 400,
            tube_radius_m: 0.06,
            deflection_scale: 50.0,
            show_deflection: true,
        }
    }
}

impl BeamInputs {
    /// Check span, loads and sampling against their form ranges.
    ///
    /// The load position only has to be finite: values outside the span are
    /// clamped by the evaluator rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn validate(&self) -> Result<(), InputError> {
        within("span_m", self.span_m, "(0, 1e6]", |v| v > 0.0 && v <= 1.0e6)?;
        within("point_load_kn", self.point_load_kn, "[0, 1e9]", |v| {
            (0.0..=1.0e9).contains(&v)
        })?;
        within("position_m", self.position_m, "(-inf, inf)", |_| true)?;
        within(
            "distributed_load_kn_per_m",
            self.distributed_load_kn_per_m,
            "[0, 1e9]",
            |v| (0.0..=1.0e9).contains(&v),
        )?;
        if !(MIN_POINTS..=MAX_POINTS).contains(&self.points) {
            return Err(InputError::SampleCount {
                value: self.points,
                min: MIN_POINTS,
                max: MAX_POINTS,
            });
        }
        Ok(())
    }

    /// Check the tube radius and deflection scale against their form ranges.
    ///
    /// These only affect the rendered picture, so a failure drops the plot
    /// data and leaves every computed result in place.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn validate_plot_options(&self) -> Result<(), InputError> {
        within("tube_radius_m", self.tube_radius_m, "[0.001, 10]", |v| {
            (0.001..=10.0).contains(&v)
        })?;
        within("deflection_scale", self.deflection_scale, "[0, 1e6]", |v| {
            (0.0..=1.0e6).contains(&v)
        })
    }

    /// Check the section dimensions against their form ranges.
    ///
    /// Kept apart from [`BeamInputs::validate`] because a bad section only
    /// prevents the stress results; reactions and moments can still be shown.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn validate_section(&self) -> Result<(), InputError> {
        within("width_m", self.width_m, "[0.001, 1000]", |v| {
            (0.001..=1_000.0).contains(&v)
        })?;
        within("depth_m", self.depth_m, "[0.001, 1000]", |v| {
            (0.001..=1_000.0).contains(&v)
        })
    }

    /// Span and loads converted to newtons and metres.
    #[must_use]
    pub fn to_config(&self) -> BeamConfig {
        BeamConfig::new(
            self.span_m,
            kilonewtons_to_newtons(self.point_load_kn),
            self.position_m,
            kilonewtons_per_metre_to_newtons_per_metre(self.distributed_load_kn_per_m),
        )
    }

    /// Rectangular section described by the width and depth fields.
    #[must_use]
    pub fn section(&self) -> RectangularSection {
        RectangularSection::new(self.width_m, self.depth_m)
    }

    /// Settings for building presentation data.
    #[must_use]
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            show_deflection: self.show_deflection,
            deflection_scale: self.deflection_scale,
            tube_radius: self.tube_radius_m,
        }
    }
}

/// Reject non-finite values, then values `accept` does not allow.
fn within(
    field: &'static str,
    value: f64,
    range: &'static str,
    accept: impl Fn(f64) -> bool,
) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if accept(value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            value,
            range,
        })
    }
}
