//! Single-phase pipe-flow hydraulics for incompressible liquids.
//!
//! The building blocks here are pure functions, composed leaf-first:
//!
//! - [`reynolds`]: `Re = v·D/ν`
//! - [`friction_factor`]: laminar `64/Re`, or the Colebrook–White equation
//!   solved iteratively for turbulent flow
//! - [`head_loss_per_100`]: Darcy–Weisbach head loss over 100 ft of pipe
//! - [`FlowState::evaluate`]: all three at a given velocity
//!
//! Pipe geometry and fluid properties are validated on construction of
//! [`PipeSpec`] and [`FluidProperties`], so the formulas never divide by a
//! zero diameter or viscosity.
//!
//! # Example
//!
//! ```
//! use supply_sizing::support::hydraulics::{
//!     FlowRegime, FlowState, FluidProperties, FrictionFactorConfig, PipeSpec,
//! };
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     length::{foot, inch},
//!     velocity::foot_per_second,
//! };
//!
//! let pipe = PipeSpec::new(Length::new::<inch>(1.025), Length::new::<foot>(5.0e-6)).unwrap();
//! let water = FluidProperties::water_60f();
//!
//! let state = FlowState::evaluate(
//!     Velocity::new::<foot_per_second>(5.0),
//!     &pipe,
//!     &water,
//!     &FrictionFactorConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(state.friction_factor.regime, FlowRegime::Turbulent);
//! assert!(state.head_loss.get::<foot>() > 0.0);
//! ```

mod flow_state;
mod friction_factor;
mod head_loss;
mod pipe;
mod reynolds;

pub use flow_state::FlowState;
pub use friction_factor::{
    FlowRegime, FrictionFactor, FrictionFactorConfig, FrictionFactorError, LAMINAR_LIMIT,
    colebrook_residual, friction_factor,
};
pub use head_loss::{REFERENCE_LENGTH_FT, head_loss_per_100};
pub use pipe::{FluidProperties, PipeSpec};
pub use reynolds::reynolds;
