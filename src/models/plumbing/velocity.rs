//! Iterative solver for the velocity at a target head loss.
//!
//! Head loss per 100 ft rises with velocity, but only implicitly: each trial
//! velocity needs its own Reynolds number and friction factor, and turbulent
//! friction factors are themselves found iteratively. This module inverts that
//! relation by bisection on velocity, with the friction factor solve nested
//! inside every residual evaluation.

mod config;
mod error;
mod problem;

pub use config::VelocityConfig;
pub use error::VelocityError;

use log::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Velocity},
    length::foot,
    velocity::foot_per_second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    hydraulics::{FlowState, FluidProperties, PipeSpec},
};

use problem::{VelocityModel, VelocityProblem};

/// A converged velocity solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySolution {
    /// Flow state at the solved velocity.
    pub flow: FlowState,

    /// Bisection iteration count.
    pub iters: usize,
}

/// Solves for the velocity whose head loss per 100 ft equals `target`.
///
/// The bracket starts at `[config.min_velocity, velocity_guess]` and its upper
/// end is doubled until it overshoots the target, up to `config.max_velocity`.
/// The result is not clamped to any design velocity limit.
///
/// Identical inputs always produce an identical result.
///
/// # Example
///
/// ```
/// use supply_sizing::models::plumbing::velocity::{VelocityConfig, solve_velocity};
/// use supply_sizing::support::{
///     constraint::StrictlyPositive,
///     hydraulics::{FluidProperties, PipeSpec},
/// };
/// use uom::si::{
///     f64::{Length, Velocity},
///     length::{foot, inch},
///     velocity::foot_per_second,
/// };
///
/// let pipe = PipeSpec::new(Length::new::<inch>(1.025), Length::new::<foot>(6.0e-5)).unwrap();
/// let target = StrictlyPositive::new(Length::new::<foot>(25.0)).unwrap();
///
/// let solution = solve_velocity(
///     target,
///     &pipe,
///     &FluidProperties::water_60f(),
///     Velocity::new::<foot_per_second>(5.0),
///     &VelocityConfig::default(),
/// )
/// .unwrap();
///
/// assert!((solution.flow.head_loss.get::<foot>() - 25.0).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns a [`VelocityError`] if the guess or the velocity limits in
/// `config` are invalid, the target cannot be
/// reached between the configured velocity limits, the target falls in the
/// laminar/turbulent gap, a friction factor evaluation fails, or the solver
/// fails to converge.
pub fn solve_velocity(
    target: Constrained<Length, StrictlyPositive>,
    pipe: &PipeSpec,
    fluid: &FluidProperties,
    velocity_guess: Velocity,
    config: &VelocityConfig,
) -> Result<VelocitySolution, VelocityError> {
    let target = target.into_inner();

    let guess = velocity_guess.get::<foot_per_second>();
    if !guess.is_finite() || guess <= 0.0 {
        return Err(VelocityError::InvalidGuess {
            guess: velocity_guess,
        });
    }

    let lower = config.min_velocity.get::<foot_per_second>();
    let limit = config.max_velocity.get::<foot_per_second>();
    if !(lower.is_finite() && limit.is_finite() && lower > 0.0 && lower < limit) {
        return Err(VelocityError::InvalidConfig {
            min_velocity: config.min_velocity,
            max_velocity: config.max_velocity,
        });
    }

    let model = VelocityModel::new(pipe, fluid, &config.friction);
    let problem = VelocityProblem::new(target);

    let at_lower = model.call(&config.min_velocity)?;
    let lower_residual = problem.residual(&at_lower);
    if lower_residual > 0.0 {
        return Err(VelocityError::BelowMinimum {
            target,
            min_head_loss: at_lower.head_loss,
        });
    }
    if lower_residual == 0.0 {
        return Ok(VelocitySolution {
            flow: at_lower,
            iters: 0,
        });
    }

    let mut upper = guess.clamp(lower, limit);
    loop {
        let at_upper = model.call(&Velocity::new::<foot_per_second>(upper))?;
        let upper_residual = problem.residual(&at_upper);
        if upper_residual == 0.0 {
            return Ok(VelocitySolution {
                flow: at_upper,
                iters: 0,
            });
        }
        if upper_residual > 0.0 {
            break;
        }
        if upper >= limit {
            return Err(VelocityError::AboveMaximum {
                target,
                max_head_loss: at_upper.head_loss,
            });
        }
        upper = (upper * 2.0).min(limit);
        debug!("expanding velocity bracket upper bound to {upper} ft/s");
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A trial velocity whose friction factor cannot be found is treated
            // as overshooting the target, which steers the search back toward
            // the lower bound where the bracket is known to be valid.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(VelocityError::MaxIters {
            residual: Length::new::<foot>(solution.residual),
            iters: solution.iters,
        });
    }

    let iters = solution.iters;
    let flow = solution.snapshot.output;

    if problem.residual(&flow).abs() > config.head_loss_tol.get::<foot>() {
        return Err(VelocityError::TransitionGap {
            target,
            velocity: flow.velocity,
            head_loss: flow.head_loss,
        });
    }

    debug!(
        "solved velocity {:.6} ft/s for {:.4} ft/100 ft in {iters} iterations",
        flow.velocity.get::<foot_per_second>(),
        target.get::<foot>(),
    );

    Ok(VelocitySolution { flow, iters })
}
