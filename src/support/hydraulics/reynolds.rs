use uom::si::{
    f64::{Length, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::units::KinematicViscosity;

/// Returns the Reynolds number `v·D/ν`.
///
/// Units are reconciled by [`uom`], so an inch diameter and an ft²/s viscosity
/// may be mixed freely. The caller guarantees a positive viscosity, which
/// [`FluidProperties`](super::FluidProperties) enforces.
#[must_use]
pub fn reynolds(velocity: Velocity, diameter: Length, viscosity: KinematicViscosity) -> f64 {
    let re: Ratio = velocity * diameter / viscosity;
    re.get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::{foot, inch},
        velocity::foot_per_second,
    };

    use crate::support::units::kinematic_viscosity_from_ft2_per_s;

    #[test]
    fn inch_diameter_is_converted() {
        let re = reynolds(
            Velocity::new::<foot_per_second>(5.0),
            Length::new::<inch>(1.025),
            kinematic_viscosity_from_ft2_per_s(1.2075e-5),
        );
        assert_relative_eq!(re, 5.0 * (1.025 / 12.0) / 1.2075e-5, max_relative = 1e-12);
    }

    #[test]
    fn scales_linearly_with_velocity() {
        let d = Length::new::<foot>(0.5);
        let nu = kinematic_viscosity_from_ft2_per_s(1.0e-5);
        let slow = reynolds(Velocity::new::<foot_per_second>(1.0), d, nu);
        let fast = reynolds(Velocity::new::<foot_per_second>(3.0), d, nu);
        assert_relative_eq!(fast, 3.0 * slow, max_relative = 1e-12);
    }

    #[test]
    fn zero_velocity_is_zero() {
        let re = reynolds(
            Velocity::new::<foot_per_second>(0.0),
            Length::new::<inch>(2.0),
            kinematic_viscosity_from_ft2_per_s(1.2075e-5),
        );
        assert_eq!(re, 0.0);
    }
}
