//! Closed-form statics for a simply supported beam.
//!
//! The beam rests on a pin at `x = 0` and a roller at `x = L`. It carries at most
//! one point load `P` at `x = a` and one uniformly distributed load `w` over the
//! full span. Moments follow the sagging-positive convention.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{EvaluationError, SectionError};
use crate::section::RectangularSection;

/// Span and loading of a simply supported beam in SI units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Distance `L` between the supports in metres.
    pub span: f64,
    /// Magnitude `P` of the point load in newtons.
    pub point_load: f64,
    /// Distance `a` of the point load from the left support in metres.
    pub point_load_position: f64,
    /// Intensity `w` of the full-span distributed load in newtons per metre.
    pub distributed_load: f64,
}

impl BeamConfig {
    /// Create a [`BeamConfig`] with explicit span and loads.
    #[must_use]
    pub const fn new(
        span: f64,
        point_load: f64,
        point_load_position: f64,
        distributed_load: f64,
    ) -> Self {
        Self {
            span,
            point_load,
            point_load_position,
            distributed_load,
        }
    }

    /// Total vertical load `P + w·L` carried by the supports.
    #[must_use]
    pub fn total_load(&self) -> f64 {
        self.point_load + self.distributed_load * self.span
    }

    /// Return a copy with the point load position clamped into `[0, L]`.
    ///
    /// The flag is `true` when the position had to be moved.
    ///
    /// # Examples
    /// ```
    /// use beamx::BeamConfig;
    ///
    /// let (config, clamped) = BeamConfig::new(6.0, 1_000.0, 7.5, 0.0).clamped();
    /// assert!(clamped);
    /// assert_eq!(config.point_load_position, 6.0);
    /// ```
    #[must_use]
    pub fn clamped(self) -> (Self, bool) {
        let position = self.point_load_position.max(0.0).min(self.span);
        let moved = position != self.point_load_position;
        (
            Self {
                point_load_position: position,
                ..self
            },
            moved,
        )
    }

    /// Support reactions for this configuration.
    #[must_use]
    pub fn reactions(&self) -> Reactions {
        compute_reactions(
            self.span,
            self.point_load,
            self.point_load_position,
            self.distributed_load,
        )
    }
}

/// Vertical support reactions in newtons, positive upwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction `RA` at the left support (`x = 0`).
    pub left: f64,
    /// Reaction `RB` at the right support (`x = L`).
    pub right: f64,
}

impl Reactions {
    /// Sum of both reactions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

/// Compute the support reactions by taking moments about the left support.
///
/// The distributed load is replaced by its resultant `w·L` acting at midspan.
/// The load position must already lie in `[0, L]` and the span must be
/// positive; neither is checked here.
///
/// # Examples
/// ```
/// use beamx::compute_reactions;
///
/// let reactions = compute_reactions(6.0, 20_000.0, 3.0, 5_000.0);
/// assert_eq!(reactions.left, 25_000.0);
/// assert_eq!(reactions.right, 25_000.0);
/// ```
#[must_use]
pub fn compute_reactions(
    span: f64,
    point_load: f64,
    point_load_position: f64,
    distributed_load: f64,
) -> Reactions {
    let resultant = distributed_load * span;
    let right = (point_load * point_load_position + resultant * (span / 2.0)) / span;
    let left = (point_load + resultant) - right;
    Reactions { left, right }
}

/// Bending moment at `x`, sagging positive.
///
/// `M(x) = RA·x − w·x²/2 − P·(x − a)·H(x − a)` where `H` is the unit step, so the
/// point load only contributes at and beyond its position. Any real `x` is
/// accepted.
///
/// # Examples
/// ```
/// use beamx::{moment_at, BeamConfig};
///
/// let config = BeamConfig::new(6.0, 20_000.0, 3.0, 5_000.0);
/// let reactions = config.reactions();
/// let midspan = moment_at(3.0, &config, &reactions);
/// assert!((midspan - 52_500.0).abs() < 1.0e-9);
/// ```
#[must_use]
pub fn moment_at(x: f64, config: &BeamConfig, reactions: &Reactions) -> f64 {
    let step = if x >= config.point_load_position {
        1.0
    } else {
        0.0
    };
    reactions.left * x
        - config.distributed_load * x * x / 2.0
        - config.point_load * (x - config.point_load_position) * step
}

/// Evaluate [`moment_at`] at every position, preserving order.
///
/// # Examples
/// ```
/// use beamx::{moments_at, BeamConfig};
/// use ndarray::array;
///
/// let config = BeamConfig::new(6.0, 20_000.0, 3.0, 5_000.0);
/// let moments = moments_at(&array![0.0, 3.0, 6.0], &config, &config.reactions());
/// assert_eq!(moments.len(), 3);
/// assert!(moments[0].abs() < 1.0e-9);
/// assert!((moments[1] - 52_500.0).abs() < 1.0e-9);
/// assert!(moments[2].abs() < 1.0e-9);
/// ```
#[must_use]
pub fn moments_at(
    positions: &Array1<f64>,
    config: &BeamConfig,
    reactions: &Reactions,
) -> Array1<f64> {
    positions.mapv(|x| moment_at(x, config, reactions))
}

/// Elastic bending stress `σ = |M|·c/I` for every moment.
///
/// # Errors
///
/// Returns [`SectionError::NonPositiveSecondMoment`] when `I` is not strictly
/// positive, instead of producing infinite or NaN stresses.
///
/// # Examples
/// ```
/// use beamx::{bending_stress, SectionError};
/// use ndarray::array;
///
/// let stress = bending_stress(&array![-2.0, 4.0], 0.5, 0.25).expect("valid section");
/// assert_eq!(stress, array![4.0, 8.0]);
///
/// let error = bending_stress(&array![1.0], 0.5, 0.0).expect_err("zero I rejected");
/// assert_eq!(error, SectionError::NonPositiveSecondMoment { second_moment: 0.0 });
/// ```
pub fn bending_stress(
    moments: &Array1<f64>,
    extreme_fibre_distance: f64,
    second_moment: f64,
) -> Result<Array1<f64>, SectionError> {
    if second_moment.is_nan() || second_moment <= 0.0 {
        return Err(SectionError::NonPositiveSecondMoment { second_moment });
    }
    Ok(moments.mapv(|moment| moment.abs() * extreme_fibre_distance / second_moment))
}

/// Evenly spaced positions over `[0, L]`, both ends included.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidSampleCount`] when `samples < 2`.
///
/// # Examples
/// ```
/// use beamx::sample_beam;
///
/// let positions = sample_beam(6.0, 4).expect("enough samples");
/// assert_eq!(positions.to_vec(), vec![0.0, 2.0, 4.0, 6.0]);
/// ```
pub fn sample_beam(span: f64, samples: usize) -> Result<Array1<f64>, EvaluationError> {
    if samples < 2 {
        return Err(EvaluationError::InvalidSampleCount { count: samples });
    }
    let mut positions = Array1::linspace(0.0, span, samples);
    // Pin the far end so the last sample sits exactly on the right support.
    positions[samples - 1] = span;
    Ok(positions)
}

/// Reactions and sampled moments for a beam, independent of its section.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamAnalysis {
    /// Configuration after the load position was clamped into the span.
    pub config: BeamConfig,
    /// Support reactions.
    pub reactions: Reactions,
    /// Sample positions in metres.
    pub positions: Array1<f64>,
    /// Bending moment at each sample position in newton metres.
    pub moments: Array1<f64>,
    /// Whether the point load position had to be clamped into the span.
    pub position_clamped: bool,
}

impl BeamAnalysis {
    /// Position and magnitude of the largest absolute sampled moment.
    #[must_use]
    pub fn peak_moment(&self) -> (f64, f64) {
        peak(&self.positions, &self.moments)
    }

    /// Attach a cross-section and compute the bending stress profile.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] when the section is degenerate.
    pub fn with_section(self, section: RectangularSection) -> Result<Evaluation, SectionError> {
        section.validate()?;
        let stresses = bending_stress(
            &self.moments,
            section.extreme_fibre_distance(),
            section.second_moment_of_area(),
        )?;
        let max_stress = stresses.fold(0.0_f64, |max, &stress| max.max(stress));
        debug!(max_stress, "computed bending stress profile");
        Ok(Evaluation {
            analysis: self,
            section,
            stresses,
            max_stress,
        })
    }
}

/// Complete response of a beam: reactions, moments and bending stresses.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Reactions and moment profile.
    pub analysis: BeamAnalysis,
    /// Section used for the stress profile.
    pub section: RectangularSection,
    /// Bending stress at each sample position in pascals.
    pub stresses: Array1<f64>,
    /// Largest sampled bending stress in pascals.
    pub max_stress: f64,
}

impl Evaluation {
    /// Support reactions.
    #[must_use]
    pub fn reactions(&self) -> Reactions {
        self.analysis.reactions
    }

    /// Position and magnitude of the largest sampled stress.
    #[must_use]
    pub fn peak_stress(&self) -> (f64, f64) {
        peak(&self.analysis.positions, &self.stresses)
    }
}

/// Compute reactions and the moment profile without a cross-section.
///
/// The point load position is clamped into `[0, L]` first; a warning is logged
/// and [`BeamAnalysis::position_clamped`] is set when that moves it.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidSpan`] for a non-positive or non-finite
/// span and [`EvaluationError::InvalidSampleCount`] when `samples < 2`.
pub fn analyse(config: &BeamConfig, samples: usize) -> Result<BeamAnalysis, EvaluationError> {
    if !config.span.is_finite() || config.span <= 0.0 {
        return Err(EvaluationError::InvalidSpan { span: config.span });
    }
    let (config, position_clamped) = config.clamped();
    if position_clamped {
        warn!(
            position = config.point_load_position,
            span = config.span,
            "point load position clamped into span"
        );
    }
    let reactions = config.reactions();
    debug!(
        left = reactions.left,
        right = reactions.right,
        "computed support reactions"
    );
    let positions = sample_beam(config.span, samples)?;
    let moments = moments_at(&positions, &config, &reactions);
    Ok(BeamAnalysis {
        config,
        reactions,
        positions,
        moments,
        position_clamped,
    })
}

/// Evaluate reactions, moments and bending stresses for a beam.
///
/// This chains [`analyse`] with [`BeamAnalysis::with_section`] and is the single
/// entry point a front end calls on every parameter change.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidSpan`], [`EvaluationError::InvalidSampleCount`]
/// or [`EvaluationError::InvalidSection`].
///
/// # Examples
/// ```
/// use beamx::{evaluate, rectangle, BeamConfig};
///
/// let config = BeamConfig::new(6.0, 20_000.0, 3.0, 5_000.0);
/// let evaluation = evaluate(&config, &rectangle(0.25, 0.45), 401).expect("valid beam");
/// assert_eq!(evaluation.reactions().left, 25_000.0);
/// assert!(evaluation.max_stress > 6.2e6 && evaluation.max_stress < 6.3e6);
/// ```
pub fn evaluate(
    config: &BeamConfig,
    section: &RectangularSection,
    samples: usize,
) -> Result<Evaluation, EvaluationError> {
    Ok(analyse(config, samples)?.with_section(*section)?)
}

/// Largest absolute value and where it occurs. Returns `(0, 0)` when empty.
fn peak(positions: &Array1<f64>, values: &Array1<f64>) -> (f64, f64) {
    positions
        .iter()
        .zip(values.iter())
        .fold((0.0, 0.0), |(best_x, best), (&x, &value)| {
            if value.abs() > best {
                (x, value.abs())
            } else {
                (best_x, best)
            }
        })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::section::rectangle;

    #[test]
    fn symmetric_point_and_distributed_load() {
        let reactions = compute_reactions(6.0, 20_000.0, 3.0, 5_000.0);
        assert_relative_eq!(reactions.right, 25_000.0, epsilon = 1.0e-9);
        assert_relative_eq!(reactions.left, 25_000.0, epsilon = 1.0e-9);
    }

    #[test]
    fn distributed_load_only_splits_evenly() {
        for position in [0.0, 2.5, 10.0] {
            let reactions = compute_reactions(10.0, 0.0, position, 2_000.0);
            assert_relative_eq!(reactions.left, 10_000.0, epsilon = 1.0e-9);
            assert_relative_eq!(reactions.right, 10_000.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn point_load_at_support_goes_straight_into_it() {
        let at_left = compute_reactions(4.0, 1_000.0, 0.0, 0.0);
        assert_relative_eq!(at_left.left, 1_000.0);
        assert_relative_eq!(at_left.right, 0.0);

        let at_right = compute_reactions(4.0, 1_000.0, 4.0, 0.0);
        assert_relative_eq!(at_right.left, 0.0);
        assert_relative_eq!(at_right.right, 1_000.0);
    }

    #[test]
    fn moment_steps_at_point_load() {
        let config = BeamConfig::new(4.0, 1_000.0, 1.0, 0.0);
        let reactions = config.reactions();
        assert_relative_eq!(reactions.left, 750.0);
        assert_relative_eq!(moment_at(1.0, &config, &reactions), 750.0);
        assert_relative_eq!(moment_at(2.0, &config, &reactions), 500.0);
        assert_relative_eq!(moment_at(4.0, &config, &reactions), 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn vectorised_moments_preserve_order() {
        let config = BeamConfig::new(10.0, 0.0, 0.0, 2_000.0);
        let reactions = config.reactions();
        let positions = array![5.0, 0.0, 10.0];
        let moments = moments_at(&positions, &config, &reactions);
        assert_relative_eq!(moments[0], 25_000.0, epsilon = 1.0e-9);
        assert_relative_eq!(moments[1], 0.0);
        assert_relative_eq!(moments[2], 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn stress_rejects_negative_second_moment() {
        let error = bending_stress(&array![1.0], 0.1, -1.0).expect_err("negative I rejected");
        assert_eq!(
            error,
            SectionError::NonPositiveSecondMoment { second_moment: -1.0 }
        );
    }

    #[test]
    fn sampling_includes_both_supports() {
        let positions = sample_beam(6.0, 400).expect("valid sample count");
        assert_eq!(positions.len(), 400);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[399], 6.0);
        let spacing = 6.0 / 399.0;
        for pair in positions.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] - pair[0], spacing, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn too_few_samples_are_rejected() {
        for count in [0, 1] {
            assert_eq!(
                sample_beam(6.0, count),
                Err(EvaluationError::InvalidSampleCount { count })
            );
        }
    }

    #[test]
    fn non_positive_span_is_rejected() {
        for span in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let config = BeamConfig::new(span, 0.0, 0.0, 0.0);
            let error = analyse(&config, 10).expect_err("invalid span rejected");
            assert!(matches!(error, EvaluationError::InvalidSpan { .. }));
        }
    }

    #[test]
    fn load_position_beyond_span_is_clamped() {
        let config = BeamConfig::new(6.0, 10_000.0, 9.0, 0.0);
        let analysis = analyse(&config, 50).expect("analysis succeeds");
        assert!(analysis.position_clamped);
        assert_eq!(analysis.config.point_load_position, 6.0);
        assert_relative_eq!(analysis.reactions.right, 10_000.0);
        assert_relative_eq!(analysis.reactions.left, 0.0, epsilon = 1.0e-9);

        let (negative, moved) = BeamConfig::new(6.0, 10_000.0, -1.0, 0.0).clamped();
        assert!(moved);
        assert_eq!(negative.point_load_position, 0.0);
    }

    #[test]
    fn degenerate_section_keeps_analysis_available() {
        let config = BeamConfig::new(6.0, 20_000.0, 3.0, 5_000.0);
        let error = evaluate(&config, &rectangle(0.0, 0.45), 100).expect_err("zero width");
        assert_eq!(
            error,
            EvaluationError::InvalidSection(SectionError::NonPositiveWidth { width: 0.0 })
        );

        let analysis = analyse(&config, 100).expect("reactions still available");
        assert_relative_eq!(analysis.reactions.total(), 50_000.0, epsilon = 1.0e-9);
    }

    #[test]
    fn peak_stress_sits_under_midspan_load() {
        let config = BeamConfig::new(6.0, 20_000.0, 3.0, 5_000.0);
        let evaluation = evaluate(&config, &rectangle(0.25, 0.45), 401).expect("valid beam");
        let (x, stress) = evaluation.peak_stress();
        assert_relative_eq!(x, 3.0, epsilon = 1.0e-9);
        let expected = 52_500.0 * 0.225 / (0.25 * 0.45_f64.powi(3) / 12.0);
        assert_relative_eq!(stress, expected, max_relative = 1.0e-9);
        assert_relative_eq!(evaluation.max_stress, stress);

        let (moment_x, moment) = evaluation.analysis.peak_moment();
        assert_relative_eq!(moment_x, 3.0, epsilon = 1.0e-9);
        assert_relative_eq!(moment, 52_500.0, max_relative = 1.0e-9);
    }
}
