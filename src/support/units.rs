//! Extensions to [`uom`] for US customary hydraulics.
//!
//! Physical quantities crossing the public API are [`uom`] quantities, so a
//! diameter given in inches and a roughness given in feet combine correctly
//! without manual conversion. This module adds what [`uom`] doesn't provide:
//!
//! - A [`KinematicViscosity`] quantity alias with an ft²/s constructor.
//! - The fixed conversion factors used by plumbing-code sizing tables, which
//!   are deliberately the rounded published values rather than exact physics.
//!
//! ```
//! use supply_sizing::support::units::{gpm_from_velocity, head_to_psi};
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     length::{foot, inch},
//!     pressure::psi,
//!     velocity::foot_per_second,
//! };
//!
//! let gpm = gpm_from_velocity(
//!     Velocity::new::<foot_per_second>(8.0),
//!     Length::new::<inch>(1.025),
//! );
//! assert!((gpm - 20.58).abs() < 0.01);
//!
//! let head = Length::new::<foot>(23.1);
//! assert!((head_to_psi(head).get::<psi>() - 10.0).abs() < 1e-9);
//! ```

mod quantities;

pub use quantities::{KinematicViscosity, kinematic_viscosity_from_ft2_per_s};

use uom::si::{
    acceleration::foot_per_second_squared,
    f64::{Acceleration, Length, Pressure, Velocity},
    length::{foot, inch},
    pressure::psi,
    velocity::foot_per_second,
};

/// Feet of water column per psi, as used by plumbing-code friction budgets.
pub const FEET_OF_HEAD_PER_PSI: f64 = 2.31;

/// Divisor in `GPM = v[ft/s] · D[in]² / 0.4084`.
pub const GPM_VELOCITY_DIVISOR: f64 = 0.4084;

/// Standard gravity in ft/s².
pub const GRAVITY_FT_PER_S2: f64 = 32.174;

/// Standard gravitational acceleration.
#[must_use]
pub fn gravity() -> Acceleration {
    Acceleration::new::<foot_per_second_squared>(GRAVITY_FT_PER_S2)
}

/// Converts a head of water to pressure using the fixed 2.31 ft/psi factor.
#[must_use]
pub fn head_to_psi(head: Length) -> Pressure {
    Pressure::new::<psi>(head.get::<foot>() / FEET_OF_HEAD_PER_PSI)
}

/// Converts a pressure to a head of water using the fixed 2.31 ft/psi factor.
#[must_use]
pub fn psi_to_head(pressure: Pressure) -> Length {
    Length::new::<foot>(pressure.get::<psi>() * FEET_OF_HEAD_PER_PSI)
}

/// Returns the flow in US gallons per minute for a velocity in a round pipe.
///
/// Returned as a raw number because fixture-unit tables are keyed on GPM.
#[must_use]
pub fn gpm_from_velocity(velocity: Velocity, diameter: Length) -> f64 {
    let d_in = diameter.get::<inch>();
    velocity.get::<foot_per_second>() * d_in * d_in / GPM_VELOCITY_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn head_and_pressure_are_inverse() {
        let head = Length::new::<foot>(57.75);
        let pressure = head_to_psi(head);
        assert_relative_eq!(pressure.get::<psi>(), 25.0, epsilon = 1e-12);
        assert_relative_eq!(psi_to_head(pressure).get::<foot>(), 57.75, epsilon = 1e-12);
    }

    #[test]
    fn gpm_matches_published_factor() {
        let gpm = gpm_from_velocity(
            Velocity::new::<foot_per_second>(5.0),
            Length::new::<inch>(2.0),
        );
        assert_relative_eq!(gpm, 5.0 * 4.0 / 0.4084, epsilon = 1e-9);
    }

    #[test]
    fn gravity_in_us_units() {
        assert_relative_eq!(
            gravity().get::<foot_per_second_squared>(),
            32.174,
            epsilon = 1e-12
        );
    }
}
