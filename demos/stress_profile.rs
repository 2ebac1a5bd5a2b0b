use beamx::{analyse, BeamConfig, BeamInputs, PlotData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start from the viewer defaults but move the point load off centre
    let inputs = BeamInputs {
        position_m: 1.5,
        points: 50,
        ..BeamInputs::default()
    };
    inputs.validate()?;
    inputs.validate_plot_options()?;

    let evaluation = beamx::evaluate(&inputs.to_config(), &inputs.section(), inputs.points)?;
    let plot = PlotData::new(&evaluation, &inputs.plot_options());
    for (point, stress) in plot.points.iter().zip(&plot.stress_mpa).step_by(7) {
        println!("x = {:6.3} m  y = {:+.4} m  σ = {stress:7.3} MPa", point[0], point[1]);
    }

    // Reactions stay available without any section at all
    let analysis = analyse(&BeamConfig::new(10.0, 0.0, 0.0, 2_000.0), 50)?;
    println!(
        "UDL only: RA = {:.1} N, RB = {:.1} N",
        analysis.reactions.left, analysis.reactions.right
    );

    Ok(())
}
