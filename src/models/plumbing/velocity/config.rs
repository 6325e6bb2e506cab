use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Velocity},
    length::foot,
    velocity::foot_per_second,
};

use crate::support::hydraulics::FrictionFactorConfig;

/// Solver configuration for matching a target head loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the velocity search variable.
    pub velocity_tol: Velocity,

    /// Absolute tolerance for the head loss residual (achieved - target).
    pub head_loss_tol: Length,

    /// Lower end of the velocity bracket.
    ///
    /// Must be positive, since zero velocity has no defined friction factor.
    pub min_velocity: Velocity,

    /// Upper limit for bracket expansion.
    ///
    /// Must be finite and above `min_velocity`.
    pub max_velocity: Velocity,

    /// Configuration of the inner friction factor solve.
    pub friction: FrictionFactorConfig,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            velocity_tol: Velocity::new::<foot_per_second>(1e-12),
            head_loss_tol: Length::new::<foot>(1e-9),
            min_velocity: Velocity::new::<foot_per_second>(1e-6),
            max_velocity: Velocity::new::<foot_per_second>(1000.0),
            friction: FrictionFactorConfig::default(),
        }
    }
}

impl VelocityConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.velocity_tol.get::<foot_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.head_loss_tol.get::<foot>(),
        }
    }
}
