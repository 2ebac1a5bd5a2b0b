#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod beam;
mod errors;
mod inputs;
mod plot;
mod section;
pub mod units;

pub use beam::{
    analyse, bending_stress, compute_reactions, evaluate, moment_at, moments_at, sample_beam,
    BeamAnalysis, BeamConfig, Evaluation, Reactions,
};
pub use errors::{EvaluationError, InputError, SectionError};
pub use inputs::{BeamInputs, MAX_POINTS, MIN_POINTS};
pub use plot::{deflection_shape, interpolate, PlotData, PlotOptions, SupportBlock};
pub use section::{rectangle, RectangularSection};
