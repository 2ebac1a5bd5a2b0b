//! Command-line options and input file handling.

use std::fs;
use std::path::{Path, PathBuf};

use beamx::{BeamInputs, InputError};
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Reactions and bending stress for a simply supported beam.
///
/// Loads are entered in kN and kN/m, lengths in m.
#[derive(Debug, Parser)]
#[command(name = "beamx", version, about, long_about = None)]
pub struct Cli {
    /// JSON file with beam inputs; flags override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Span L between the supports (m)
    #[arg(long)]
    pub span: Option<f64>,

    /// Point load P (kN)
    #[arg(long)]
    pub point_load: Option<f64>,

    /// Distance a of the point load from the left support (m)
    #[arg(long)]
    pub position: Option<f64>,

    /// Full-span distributed load w (kN/m)
    #[arg(long)]
    pub udl: Option<f64>,

    /// Section width b (m)
    #[arg(long)]
    pub width: Option<f64>,

    /// Section depth h (m)
    #[arg(long)]
    pub depth: Option<f64>,

    /// Number of sample points along the span
    #[arg(short = 'n', long)]
    pub points: Option<usize>,

    /// Radius of the rendered beam tube (m)
    #[arg(long)]
    pub tube_radius: Option<f64>,

    /// Exaggeration of the visual deflection shape
    #[arg(long)]
    pub deflection_scale: Option<f64>,

    /// Draw the beam straight instead of following the moment diagram
    #[arg(long)]
    pub no_deflection: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How results are written to standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// Full results, including plot data, as pretty-printed JSON.
    Json,
}

/// Error returned when the command-line inputs cannot be assembled.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the input file cannot be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the input file is not valid JSON for [`BeamInputs`].
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Returned when a value lies outside its accepted range.
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Cli {
    /// Layer the flags over the input file (or the defaults) and validate.
    pub fn resolve_inputs(&self) -> Result<BeamInputs, ConfigError> {
        let mut inputs = match &self.input {
            Some(path) => load_inputs(path)?,
            None => BeamInputs::default(),
        };
        self.apply_overrides(&mut inputs);
        inputs.validate()?;
        Ok(inputs)
    }

    /// Copy every flag that was given onto `inputs`.
    fn apply_overrides(&self, inputs: &mut BeamInputs) {
        if let Some(span) = self.span {
            inputs.span_m = span;
        }
        if let Some(point_load) = self.point_load {
            inputs.point_load_kn = point_load;
        }
        if let Some(position) = self.position {
            inputs.position_m = position;
        }
        if let Some(udl) = self.udl {
            inputs.distributed_load_kn_per_m = udl;
        }
        if let Some(width) = self.width {
            inputs.width_m = width;
        }
        if let Some(depth) = self.depth {
            inputs.depth_m = depth;
        }
        if let Some(points) = self.points {
            inputs.points = points;
        }
        if let Some(radius) = self.tube_radius {
            inputs.tube_radius_m = radius;
        }
        if let Some(scale) = self.deflection_scale {
            inputs.deflection_scale = scale;
        }
        if self.no_deflection {
            inputs.show_deflection = false;
        }
    }
}

/// Read [`BeamInputs`] from a JSON file.
fn load_inputs(path: &Path) -> Result<BeamInputs, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "beamx",
            "--span",
            "10",
            "--point-load",
            "0",
            "--udl",
            "2",
            "--no-deflection",
        ]);
        let inputs = cli.resolve_inputs().expect("valid inputs");
        assert_eq!(inputs.span_m, 10.0);
        assert_eq!(inputs.point_load_kn, 0.0);
        assert_eq!(inputs.distributed_load_kn_per_m, 2.0);
        assert!(!inputs.show_deflection);
        assert_eq!(inputs.points, 400);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn out_of_range_flag_is_reported() {
        let cli = Cli::parse_from(["beamx", "--points", "3"]);
        let error = cli.resolve_inputs().expect_err("too few points");
        assert!(matches!(
            error,
            ConfigError::Input(InputError::SampleCount { value: 3, .. })
        ));
    }

    #[test]
    fn missing_input_file_is_reported() {
        let cli = Cli::parse_from(["beamx", "--input", "does/not/exist.json"]);
        let error = cli.resolve_inputs().expect_err("file is missing");
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
