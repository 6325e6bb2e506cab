//! Type L copper tube catalogue.

use uom::si::{
    f64::Length,
    length::{foot, inch},
};

use crate::support::{
    constraint::ConstraintResult,
    hydraulics::PipeSpec,
};

/// Absolute roughness of drawn copper tube, in feet.
pub const COPPER_ROUGHNESS_FT: f64 = 5.0e-6;

/// A nominal copper tube size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopperTube {
    /// Trade size label, e.g. `"1-1/4"`.
    pub nominal: &'static str,

    /// Nominal size in inches.
    pub nominal_inches: f64,

    /// Inside diameter in inches.
    pub inside_diameter_inches: f64,
}

impl CopperTube {
    const fn new(nominal: &'static str, nominal_inches: f64, inside_diameter_inches: f64) -> Self {
        Self {
            nominal,
            nominal_inches,
            inside_diameter_inches,
        }
    }

    /// Returns the inside diameter.
    #[must_use]
    pub fn inside_diameter(&self) -> Length {
        Length::new::<inch>(self.inside_diameter_inches)
    }

    /// Returns this tube as a pipe with the given absolute roughness.
    ///
    /// # Errors
    ///
    /// Returns an error if the inside diameter is not strictly positive or
    /// the roughness is negative.
    pub fn pipe(&self, roughness: Length) -> ConstraintResult<PipeSpec> {
        PipeSpec::new(self.inside_diameter(), roughness)
    }
}

/// Type L copper, 1/2" through 4", smallest first.
pub const TYPE_L: [CopperTube; 9] = [
    CopperTube::new("1/2", 0.5, 0.545),
    CopperTube::new("3/4", 0.75, 0.785),
    CopperTube::new("1", 1.0, 1.025),
    CopperTube::new("1-1/4", 1.25, 1.265),
    CopperTube::new("1-1/2", 1.5, 1.505),
    CopperTube::new("2", 2.0, 1.985),
    CopperTube::new("2-1/2", 2.5, 2.465),
    CopperTube::new("3", 3.0, 2.945),
    CopperTube::new("4", 4.0, 3.905),
];

/// Returns the default copper roughness as a length.
#[must_use]
pub fn copper_roughness() -> Length {
    Length::new::<foot>(COPPER_ROUGHNESS_FT)
}
