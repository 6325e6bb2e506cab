use uom::si::{
    f64::{Length, Ratio},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::{KinematicViscosity, kinematic_viscosity_from_ft2_per_s},
};

/// Kinematic viscosity of water at 60°F, in ft²/s.
const WATER_60F_FT2_PER_S: f64 = 1.2075e-5;

/// Geometry of a straight pipe run.
///
/// The inside diameter is guaranteed to be strictly positive and the absolute
/// roughness non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    diameter: Length,
    roughness: Length,
}

impl PipeSpec {
    /// Constructs a validated pipe.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter is not strictly positive or the
    /// roughness is negative.
    pub fn new(diameter: Length, roughness: Length) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(diameter)?,
            NonNegative::new(roughness)?,
        ))
    }

    /// Constructs a pipe from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        diameter: Constrained<Length, StrictlyPositive>,
        roughness: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            diameter: diameter.into_inner(),
            roughness: roughness.into_inner(),
        }
    }

    /// Returns the inside diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Returns the absolute roughness.
    #[must_use]
    pub fn roughness(&self) -> Length {
        self.roughness
    }

    /// Returns the relative roughness `ε/D`.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        let relative: Ratio = self.roughness / self.diameter;
        relative.get::<ratio>()
    }
}

/// Properties of the conveyed liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    kinematic_viscosity: KinematicViscosity,
}

impl FluidProperties {
    /// Constructs validated fluid properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the viscosity is not strictly positive.
    pub fn new(kinematic_viscosity: KinematicViscosity) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(StrictlyPositive::new(
            kinematic_viscosity,
        )?))
    }

    /// Constructs fluid properties from a pre-validated viscosity.
    #[must_use]
    pub fn from_constrained(
        kinematic_viscosity: Constrained<KinematicViscosity, StrictlyPositive>,
    ) -> Self {
        Self {
            kinematic_viscosity: kinematic_viscosity.into_inner(),
        }
    }

    /// Water at 60°F.
    #[must_use]
    pub fn water_60f() -> Self {
        Self {
            kinematic_viscosity: kinematic_viscosity_from_ft2_per_s(WATER_60F_FT2_PER_S),
        }
    }

    /// Returns the kinematic viscosity.
    #[must_use]
    pub fn kinematic_viscosity(&self) -> KinematicViscosity {
        self.kinematic_viscosity
    }
}
