use log::trace;
use thiserror::Error;

use super::PipeSpec;

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Flow regime used to determine a friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// `Re < 2000`, where `f = 64/Re`.
    Laminar,
    /// `Re ≥ 2000`, where `f` satisfies the Colebrook–White equation.
    Turbulent,
}

/// A Darcy friction factor and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    /// Darcy–Weisbach friction factor.
    pub value: f64,

    /// Regime selected from the Reynolds number.
    pub regime: FlowRegime,

    /// Iterations taken to converge. Always zero for laminar flow.
    pub iters: usize,
}

/// Solver configuration for the Colebrook–White iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactorConfig {
    /// Friction factor the iteration starts from.
    pub initial_guess: f64,

    /// Maximum iteration count.
    pub max_iters: usize,

    /// Absolute tolerance on the Colebrook–White residual.
    pub residual_tol: f64,
}

impl Default for FrictionFactorConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.02,
            max_iters: 100,
            residual_tol: 1e-12,
        }
    }
}

/// Errors that can occur while determining a friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrictionFactorError {
    /// The Reynolds number is zero, negative, or not finite.
    #[error("invalid Reynolds number: {reynolds}")]
    InvalidReynolds { reynolds: f64 },

    /// The initial guess is not a positive, finite friction factor.
    #[error("invalid initial friction factor guess: {guess}")]
    InvalidGuess { guess: f64 },

    /// An iterate left the physical domain (`f > 0`).
    ///
    /// Happens only for relative roughness so large that the Colebrook–White
    /// equation has no positive solution.
    #[error("friction factor iteration left the physical domain after {iters} iterations")]
    NonPhysical { iters: usize },

    /// The iteration limit was reached without converging.
    #[error("friction factor solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Colebrook–White residual of the last iterate.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Determines the Darcy friction factor for a pipe at a Reynolds number.
///
/// Laminar flow uses the exact `64/Re`. Otherwise the Colebrook–White equation
///
/// ```text
/// 1/√f = -2·log10( ε/(3.7·D) + 2.51/(Re·√f) )
/// ```
///
/// is solved by successive substitution in `x = 1/√f`, starting from
/// `config.initial_guess`. Working in `x` keeps every iterate at `f = 1/x² > 0`.
///
/// # Errors
///
/// Returns a [`FrictionFactorError`] if the Reynolds number or initial guess
/// is invalid, or if the iteration fails to converge.
pub fn friction_factor(
    reynolds: f64,
    pipe: &PipeSpec,
    config: &FrictionFactorConfig,
) -> Result<FrictionFactor, FrictionFactorError> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(FrictionFactorError::InvalidReynolds { reynolds });
    }

    if reynolds < LAMINAR_LIMIT {
        return Ok(FrictionFactor {
            value: 64.0 / reynolds,
            regime: FlowRegime::Laminar,
            iters: 0,
        });
    }

    let guess = config.initial_guess;
    if !guess.is_finite() || guess <= 0.0 {
        return Err(FrictionFactorError::InvalidGuess { guess });
    }

    let colebrook = Colebrook::new(reynolds, pipe);
    let mut x = 1.0 / guess.sqrt();
    let mut iters = 0;

    loop {
        let residual = colebrook.residual(x);
        trace!("colebrook iteration {iters}: 1/sqrt(f)={x}, residual={residual}");

        if residual.abs() <= config.residual_tol {
            return Ok(FrictionFactor {
                value: 1.0 / (x * x),
                regime: FlowRegime::Turbulent,
                iters,
            });
        }

        if iters >= config.max_iters {
            return Err(FrictionFactorError::MaxIters { residual, iters });
        }

        // Substitution step: x ← -2·log10(a + b·x), which equals x - residual.
        x -= residual;
        iters += 1;

        if x.is_nan() || x <= 0.0 {
            return Err(FrictionFactorError::NonPhysical { iters });
        }
    }
}

/// Returns the Colebrook–White residual `1/√f + 2·log10(ε/(3.7·D) + 2.51/(Re·√f))`.
///
/// The residual is zero at the turbulent friction factor for the given
/// Reynolds number and pipe.
#[must_use]
pub fn colebrook_residual(f: f64, reynolds: f64, pipe: &PipeSpec) -> f64 {
    Colebrook::new(reynolds, pipe).residual(1.0 / f.sqrt())
}

/// Colebrook–White equation in terms of `x = 1/√f`.
struct Colebrook {
    roughness_term: f64,
    reynolds_term: f64,
}

impl Colebrook {
    fn new(reynolds: f64, pipe: &PipeSpec) -> Self {
        Self {
            roughness_term: pipe.relative_roughness() / 3.7,
            reynolds_term: 2.51 / reynolds,
        }
    }

    fn residual(&self, x: f64) -> f64 {
        x + 2.0 * (self.roughness_term + self.reynolds_term * x).log10()
    }
}
