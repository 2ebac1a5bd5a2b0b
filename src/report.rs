use crate::analysis::AnalysisSummary;
use std::fmt::Write;

/// Render a textual summary of the beam analysis.
///
/// The layout follows the results panel of the desktop viewer: reactions in kN
/// and the maximum bending stress in MPa, each to three decimals.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();
    let inputs = &summary.inputs;

    // Restate the problem before the numbers so the reader knows what they
    // describe.
    writeln!(
        &mut output,
        "Simply supported beam (L = {:.3} m, P = {:.3} kN at a = {:.3} m, w = {:.3} kN/m)",
        inputs.span_m,
        inputs.point_load_kn,
        summary.applied_position_m,
        inputs.distributed_load_kn_per_m
    )
    .expect("writing to string cannot fail");

    if summary.position_clamped {
        writeln!(
            &mut output,
            "Note: point load position {:.3} m lies outside the span and was moved to {:.3} m",
            inputs.position_m, summary.applied_position_m
        )
        .expect("writing to string cannot fail");
    }

    writeln!(&mut output, "RA: {:.3} kN", summary.left_reaction_kn)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "RB: {:.3} kN", summary.right_reaction_kn)
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Max |M|: {:.3} kN·m at x = {:.3} m",
        summary.peak_moment_knm, summary.peak_moment_at_m
    )
    .expect("writing to string cannot fail");

    match (&summary.stress, &summary.stress_unavailable) {
        (Some(stress), _) => {
            writeln!(
                &mut output,
                "Max σ: {:.3} MPa at x = {:.3} m",
                stress.max_stress_mpa, stress.at_m
            )
            .expect("writing to string cannot fail");
        }
        (None, Some(reason)) => {
            writeln!(&mut output, "Max σ: not available ({reason})")
                .expect("writing to string cannot fail");
        }
        (None, None) => output.push_str("Max σ: not available\n"),
    }

    output.push_str(
        "Stress shown = elastic bending stress σ = |M|·c/I (beam theory), not full 3D FEA.\n",
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StressSummary;
    use beamx::BeamInputs;

    fn summary() -> AnalysisSummary {
        AnalysisSummary {
            inputs: BeamInputs::default(),
            applied_position_m: 3.0,
            position_clamped: false,
            left_reaction_kn: 25.0,
            right_reaction_kn: 25.0,
            peak_moment_knm: 52.5,
            peak_moment_at_m: 3.0,
            stress: Some(StressSummary {
                max_stress_mpa: 6.222_222,
                at_m: 3.0,
            }),
            stress_unavailable: None,
            plot: None,
        }
    }

    #[test]
    fn formats_results_panel() {
        let report = render_summary(&summary());
        assert!(report.contains("Simply supported beam (L = 6.000 m"));
        assert!(report.contains("RA: 25.000 kN"));
        assert!(report.contains("RB: 25.000 kN"));
        assert!(report.contains("Max σ: 6.222 MPa"));
        assert!(!report.contains("Note:"));
    }

    #[test]
    fn explains_missing_stress_and_clamping() {
        let mut summary = summary();
        summary.stress = None;
        summary.stress_unavailable = Some("width_m must lie in [0.001, 1000]".to_string());
        summary.position_clamped = true;
        let report = render_summary(&summary);
        assert!(report.contains("Max σ: not available (width_m"));
        assert!(report.contains("was moved to 3.000 m"));
    }
}
