use beamx::{evaluate, rectangle, BeamConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 6 m beam with 20 kN at midspan and 5 kN/m over the whole span
    let config = BeamConfig::new(6.0, 20_000.0, 3.0, 5_000.0);

    // A 250 mm wide, 450 mm deep rectangular section
    let section = rectangle(0.25, 0.45);

    // Evaluate the beam at 401 points so one lands on midspan
    let evaluation = evaluate(&config, &section, 401)?;

    // Print the support reactions and the peak bending stress
    let reactions = evaluation.reactions();
    println!("RA = {:.3} kN", reactions.left / 1.0e3);
    println!("RB = {:.3} kN", reactions.right / 1.0e3);
    let (x, stress) = evaluation.peak_stress();
    println!("max stress = {:.3} MPa at x = {x:.3} m", stress / 1.0e6);

    // All done
    Ok(())
}
