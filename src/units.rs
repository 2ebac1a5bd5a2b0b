//! Conversions between the display units of a front end and the SI units used
//! by the evaluator.
//!
//! Forms take loads in kilonewtons and report stresses in megapascals. The
//! evaluator itself never converts, so these helpers are the only place where
//! scale factors appear.

use uom::si::{
    f64::{Force, Length, Pressure},
    force::{kilonewton, newton},
    length::meter,
    pressure::{megapascal, pascal},
};

/// Convert a force in kilonewtons to newtons.
///
/// # Examples
/// ```
/// use beamx::units::kilonewtons_to_newtons;
///
/// assert!((kilonewtons_to_newtons(20.0) - 20_000.0).abs() < 1.0e-9);
/// ```
#[must_use]
pub fn kilonewtons_to_newtons(value: f64) -> f64 {
    Force::new::<kilonewton>(value).get::<newton>()
}

/// Convert a force in newtons to kilonewtons.
#[must_use]
pub fn newtons_to_kilonewtons(value: f64) -> f64 {
    Force::new::<newton>(value).get::<kilonewton>()
}

/// Convert a line load in kilonewtons per metre to newtons per metre.
#[must_use]
pub fn kilonewtons_per_metre_to_newtons_per_metre(value: f64) -> f64 {
    let per_metre = Length::new::<meter>(1.0);
    (Force::new::<kilonewton>(value) / per_metre).value
}

/// Convert a moment in newton metres to kilonewton metres.
#[must_use]
pub fn newton_metres_to_kilonewton_metres(value: f64) -> f64 {
    newtons_to_kilonewtons(value)
}

/// Convert a stress in pascals to megapascals.
///
/// # Examples
/// ```
/// use beamx::units::pascals_to_megapascals;
///
/// assert!((pascals_to_megapascals(6.5e6) - 6.5).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn pascals_to_megapascals(value: f64) -> f64 {
    Pressure::new::<pascal>(value).get::<megapascal>()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn force_conversions_are_inverse() {
        assert_relative_eq!(kilonewtons_to_newtons(5.0), 5_000.0, max_relative = 1.0e-12);
        assert_relative_eq!(newtons_to_kilonewtons(25_000.0), 25.0, max_relative = 1.0e-12);
        assert_relative_eq!(
            newton_metres_to_kilonewton_metres(52_500.0),
            52.5,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn line_load_is_scaled_to_base_units() {
        assert_relative_eq!(
            kilonewtons_per_metre_to_newtons_per_metre(5.0),
            5_000.0,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(kilonewtons_per_metre_to_newtons_per_metre(0.0), 0.0);
    }

    #[test]
    fn stress_is_reported_in_megapascals() {
        assert_relative_eq!(
            pascals_to_megapascals(6_222_222.0),
            6.222_222,
            max_relative = 1.0e-12
        );
    }
}
