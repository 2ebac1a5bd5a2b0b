use beamx::units::{
    newton_metres_to_kilonewton_metres, newtons_to_kilonewtons, pascals_to_megapascals,
};
use beamx::{analyse, evaluate, BeamAnalysis, BeamInputs, EvaluationError, PlotData};
use serde::Serialize;
use tracing::{info, warn};

/// Peak bending stress in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressSummary {
    /// Largest sampled bending stress in MPa.
    pub max_stress_mpa: f64,
    /// Position of the largest stress in metres.
    pub at_m: f64,
}

/// Results of one update, in the units shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Inputs that produced the result, exposed for reporting.
    pub inputs: BeamInputs,
    /// Point load position actually used, after clamping into the span.
    pub applied_position_m: f64,
    /// Whether the point load position had to be clamped.
    pub position_clamped: bool,
    /// Left support reaction in kN.
    pub left_reaction_kn: f64,
    /// Right support reaction in kN.
    pub right_reaction_kn: f64,
    /// Largest absolute sampled moment in kN·m.
    pub peak_moment_knm: f64,
    /// Position of the largest moment in metres.
    pub peak_moment_at_m: f64,
    /// Peak stress, absent when the section was rejected.
    pub stress: Option<StressSummary>,
    /// Why the stress could not be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_unavailable: Option<String>,
    /// Data for drawing the beam coloured by stress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotData>,
}

impl AnalysisSummary {
    /// Summary of reactions and moments, before any stress is attached.
    fn from_analysis(inputs: &BeamInputs, analysis: &BeamAnalysis) -> Self {
        let (peak_moment_at_m, peak_moment) = analysis.peak_moment();
        Self {
            inputs: inputs.clone(),
            applied_position_m: analysis.config.point_load_position,
            position_clamped: analysis.position_clamped,
            left_reaction_kn: newtons_to_kilonewtons(analysis.reactions.left),
            right_reaction_kn: newtons_to_kilonewtons(analysis.reactions.right),
            peak_moment_knm: newton_metres_to_kilonewton_metres(peak_moment),
            peak_moment_at_m,
            stress: None,
            stress_unavailable: None,
            plot: None,
        }
    }
}

/// Evaluate the beam described by `inputs` and collect the displayed results.
///
/// A rejected section does not fail the run: reactions and moments are still
/// reported and the reason is recorded in
/// [`AnalysisSummary::stress_unavailable`]. Rejected plot settings only drop
/// [`AnalysisSummary::plot`].
pub fn run_analysis(inputs: &BeamInputs) -> Result<AnalysisSummary, EvaluationError> {
    let config = inputs.to_config();

    if let Err(error) = inputs.validate_section() {
        warn!(%error, "section rejected, reporting reactions only");
        return reactions_only(inputs, error.to_string());
    }

    match evaluate(&config, &inputs.section(), inputs.points) {
        Ok(evaluation) => {
            let (at_m, max_stress) = evaluation.peak_stress();
            let mut summary = AnalysisSummary::from_analysis(inputs, &evaluation.analysis);
            summary.stress = Some(StressSummary {
                max_stress_mpa: pascals_to_megapascals(max_stress),
                at_m,
            });
            match inputs.validate_plot_options() {
                Ok(()) => {
                    summary.plot = Some(PlotData::new(&evaluation, &inputs.plot_options()));
                }
                Err(error) => warn!(%error, "plot settings rejected, omitting plot data"),
            }
            info!(
                left = summary.left_reaction_kn,
                right = summary.right_reaction_kn,
                max_stress_mpa = pascals_to_megapascals(max_stress),
                "beam evaluated"
            );
            Ok(summary)
        }
        Err(EvaluationError::InvalidSection(error)) => {
            warn!(%error, "section rejected, reporting reactions only");
            reactions_only(inputs, error.to_string())
        }
        Err(error) => Err(error),
    }
}

/// Summary without stress results.
fn reactions_only(
    inputs: &BeamInputs,
    reason: String,
) -> Result<AnalysisSummary, EvaluationError> {
    let analysis = analyse(&inputs.to_config(), inputs.points)?;
    let mut summary = AnalysisSummary::from_analysis(inputs, &analysis);
    summary.stress_unavailable = Some(reason);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_inputs_match_hand_calculation() {
        let summary = run_analysis(&BeamInputs::default()).expect("analysis runs");

        assert_relative_eq!(summary.left_reaction_kn, 25.0, epsilon = 1.0e-9);
        assert_relative_eq!(summary.right_reaction_kn, 25.0, epsilon = 1.0e-9);
        assert!(!summary.position_clamped);

        // 400 samples straddle midspan, so the peak is just below wL²/8 + PL/4.
        assert!(summary.peak_moment_knm <= 52.5 + 1.0e-9);
        assert!(summary.peak_moment_knm > 52.3);

        let stress = summary.stress.expect("stress available");
        assert!(stress.max_stress_mpa > 6.19 && stress.max_stress_mpa <= 6.223);
        assert!(summary.stress_unavailable.is_none());
        assert_eq!(summary.plot.expect("plot data").points.len(), 400);
    }

    #[test]
    fn rejected_section_still_reports_reactions() {
        let inputs = BeamInputs {
            depth_m: 0.0,
            ..BeamInputs::default()
        };
        let summary = run_analysis(&inputs).expect("reactions still computed");
        assert_relative_eq!(summary.left_reaction_kn, 25.0, epsilon = 1.0e-9);
        assert!(summary.stress.is_none());
        assert!(summary.plot.is_none());
        assert!(summary
            .stress_unavailable
            .expect("reason recorded")
            .contains("depth_m"));
    }

    #[test]
    fn rejected_plot_settings_keep_stress_results() {
        let inputs = BeamInputs {
            deflection_scale: 2.0e6,
            ..BeamInputs::default()
        };
        let summary = run_analysis(&inputs).expect("analysis runs");
        assert!(summary.plot.is_none());
        assert!(summary.stress.is_some());
        assert!(summary.stress_unavailable.is_none());
        assert_relative_eq!(summary.right_reaction_kn, 25.0, epsilon = 1.0e-9);
    }

    #[test]
    fn position_beyond_span_is_clamped_and_flagged() {
        let inputs = BeamInputs {
            position_m: 8.0,
            distributed_load_kn_per_m: 0.0,
            ..BeamInputs::default()
        };
        let summary = run_analysis(&inputs).expect("analysis runs");
        assert!(summary.position_clamped);
        assert_relative_eq!(summary.applied_position_m, 6.0);
        assert_relative_eq!(summary.right_reaction_kn, 20.0, epsilon = 1.0e-9);
        assert_relative_eq!(summary.left_reaction_kn, 0.0, epsilon = 1.0e-9);
    }
}
