//! Geometry and colour data a renderer needs to draw an evaluated beam.
//!
//! Nothing here is structural: the deflection shape is the moment diagram
//! scaled for display, not a computed deflection.

use serde::{Deserialize, Serialize};

use crate::beam::Evaluation;
use crate::units::pascals_to_megapascals;

/// Display settings for the rendered beam.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Whether to offset the beam by the exaggerated deflection shape.
    pub show_deflection: bool,
    /// Exaggeration factor for the deflection shape.
    pub deflection_scale: f64,
    /// Radius of the beam tube in metres.
    pub tube_radius: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            show_deflection: true,
            deflection_scale: 50.0,
            tube_radius: 0.06,
        }
    }
}

/// Axis-aligned box drawn under a support.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportBlock {
    /// Centre of the box.
    pub center: [f64; 3],
    /// Extent along the beam axis.
    pub x_length: f64,
    /// Vertical extent.
    pub y_length: f64,
    /// Out-of-plane extent.
    pub z_length: f64,
}

impl SupportBlock {
    /// Block sized from the tube radius and centred below `x`.
    #[must_use]
    pub fn below(x: f64, tube_radius: f64) -> Self {
        let width = tube_radius * 1.8;
        let height = tube_radius * 1.2;
        Self {
            center: [x, -height * 2.0, 0.0],
            x_length: width,
            y_length: height,
            z_length: width,
        }
    }
}

/// Polyline, stress colouring and supports for one evaluated beam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    /// Sample positions along the beam in metres.
    pub positions: Vec<f64>,
    /// Polyline vertices `(x, y, 0)` including the display offset.
    pub points: Vec<[f64; 3]>,
    /// Bending stress at each vertex in megapascals.
    pub stress_mpa: Vec<f64>,
    /// Largest bending stress in megapascals.
    pub max_stress_mpa: f64,
    /// Blocks under the left and right supports.
    pub supports: [SupportBlock; 2],
    /// Radius of the beam tube in metres.
    pub tube_radius: f64,
}

impl PlotData {
    /// Build presentation data for an evaluation.
    #[must_use]
    pub fn new(evaluation: &Evaluation, options: &PlotOptions) -> Self {
        let analysis = &evaluation.analysis;
        let offsets = if options.show_deflection {
            deflection_shape(&analysis.moments.to_vec(), options.deflection_scale)
        } else {
            vec![0.0; analysis.moments.len()]
        };
        let positions = analysis.positions.to_vec();
        let points = positions
            .iter()
            .zip(&offsets)
            .map(|(&x, &y)| [x, y, 0.0])
            .collect();
        let stress_mpa = evaluation
            .stresses
            .iter()
            .map(|&stress| pascals_to_megapascals(stress))
            .collect();
        Self {
            positions,
            points,
            stress_mpa,
            max_stress_mpa: pascals_to_megapascals(evaluation.max_stress),
            supports: [
                SupportBlock::below(0.0, options.tube_radius),
                SupportBlock::below(analysis.config.span, options.tube_radius),
            ],
            tube_radius: options.tube_radius,
        }
    }

    /// Stress in megapascals at an arbitrary position, for colouring mesh vertices.
    #[must_use]
    pub fn stress_at(&self, x: f64) -> Option<f64> {
        interpolate(&self.positions, &self.stress_mpa, x)
    }
}

/// Moment diagram scaled to a display offset: `y = −(M / max|M|)·scale·0.001`.
///
/// Returns zeros when every moment is zero, so an unloaded beam stays straight.
///
/// # Examples
/// ```
/// use beamx::deflection_shape;
///
/// let shape = deflection_shape(&[0.0, 50.0, 100.0], 50.0);
/// assert_eq!(shape.len(), 3);
/// assert!((shape[1] + 0.025).abs() < 1.0e-12);
/// assert!((shape[2] + 0.05).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn deflection_shape(moments: &[f64], scale: f64) -> Vec<f64> {
    let max_moment = moments.iter().fold(0.0_f64, |max, m| max.max(m.abs()));
    if max_moment > 0.0 {
        moments
            .iter()
            .map(|m| -(m / max_moment) * scale * 0.001)
            .collect()
    } else {
        vec![0.0; moments.len()]
    }
}

/// Piecewise linear interpolation of `ys` over increasing `xs`.
///
/// Positions before the first sample take the first value and positions after
/// the last sample take the last value. Returns `None` when the slices are
/// empty or of different lengths, or when `x` is NaN.
///
/// # Examples
/// ```
/// use beamx::interpolate;
///
/// let xs = [0.0, 1.0, 2.0];
/// let ys = [0.0, 10.0, 30.0];
/// assert_eq!(interpolate(&xs, &ys, 1.5), Some(20.0));
/// assert_eq!(interpolate(&xs, &ys, -1.0), Some(0.0));
/// assert_eq!(interpolate(&xs, &ys, 9.0), Some(30.0));
/// ```
#[must_use]
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }
    if x.is_nan() {
        return None;
    }
    let last = xs.len() - 1;
    if x <= xs[0] {
        return Some(ys[0]);
    }
    if x >= xs[last] {
        return Some(ys[last]);
    }
    // First index with xs[i] > x; the guards above keep it in 1..=last.
    let upper = xs.partition_point(|&sample| sample <= x);
    let lower = upper - 1;
    let span = xs[upper] - xs[lower];
    if span == 0.0 {
        return Some(ys[lower]);
    }
    let t = (x - xs[lower]) / span;
    Some(ys[lower] + t * (ys[upper] - ys[lower]))
}
