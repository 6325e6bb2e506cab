use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Velocity},
    length::foot,
    velocity::foot_per_second,
};

use crate::support::hydraulics::FrictionFactorError;

/// Errors that can occur while solving for the velocity at a target head loss.
#[derive(Debug, Error)]
pub enum VelocityError {
    /// A friction factor evaluation failed.
    #[error("friction factor solve failed")]
    FrictionFactor(#[from] FrictionFactorError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The velocity guess is not a positive, finite velocity.
    #[error("invalid velocity guess: {} ft/s", .guess.get::<foot_per_second>())]
    InvalidGuess { guess: Velocity },

    /// The configured velocity limits do not form a positive, finite bracket.
    #[error(
        "invalid velocity limits: min={} ft/s, max={} ft/s",
        .min_velocity.get::<foot_per_second>(),
        .max_velocity.get::<foot_per_second>()
    )]
    InvalidConfig {
        min_velocity: Velocity,
        max_velocity: Velocity,
    },

    /// The target is smaller than the head loss at the minimum velocity.
    #[error(
        "target head loss {} ft/100 ft is below the minimum {} ft/100 ft",
        .target.get::<foot>(),
        .min_head_loss.get::<foot>()
    )]
    BelowMinimum {
        target: Length,
        min_head_loss: Length,
    },

    /// The target is larger than the head loss at the maximum velocity.
    #[error(
        "target head loss {} ft/100 ft exceeds the maximum {} ft/100 ft",
        .target.get::<foot>(),
        .max_head_loss.get::<foot>()
    )]
    AboveMaximum {
        target: Length,
        max_head_loss: Length,
    },

    /// The target falls in the jump between laminar and turbulent head loss.
    ///
    /// Head loss is discontinuous at the laminar limit, so targets between the
    /// laminar and turbulent values there have no matching velocity.
    #[error(
        "target head loss {} ft/100 ft falls in the laminar/turbulent gap near {} ft/s",
        .target.get::<foot>(),
        .velocity.get::<foot_per_second>()
    )]
    TransitionGap {
        target: Length,

        /// Velocity at which the bracket collapsed.
        velocity: Velocity,

        /// Head loss at that velocity.
        head_loss: Length,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={} ft", .residual.get::<foot>())]
    MaxIters {
        /// Best head loss residual achieved.
        residual: Length,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
