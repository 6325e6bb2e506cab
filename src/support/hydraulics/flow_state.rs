use uom::si::f64::{Length, Velocity};

use super::{
    FluidProperties, FrictionFactor, FrictionFactorConfig, FrictionFactorError, PipeSpec,
    friction_factor, head_loss_per_100, reynolds,
};

/// Hydraulic state of a pipe at a given velocity.
///
/// Derived on every evaluation and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    /// Mean flow velocity.
    pub velocity: Velocity,

    /// Reynolds number.
    pub reynolds: f64,

    /// Darcy friction factor and its convergence record.
    pub friction_factor: FrictionFactor,

    /// Head loss over 100 ft of pipe.
    pub head_loss: Length,
}

impl FlowState {
    /// Evaluates Reynolds number, friction factor, and head loss at `velocity`.
    ///
    /// # Errors
    ///
    /// Returns a [`FrictionFactorError`] if the velocity yields an invalid
    /// Reynolds number (zero, negative, or not finite) or the friction factor
    /// iteration does not converge.
    pub fn evaluate(
        velocity: Velocity,
        pipe: &PipeSpec,
        fluid: &FluidProperties,
        config: &FrictionFactorConfig,
    ) -> Result<Self, FrictionFactorError> {
        let reynolds = reynolds(velocity, pipe.diameter(), fluid.kinematic_viscosity());
        let friction_factor = friction_factor(reynolds, pipe, config)?;
        let head_loss = head_loss_per_100(friction_factor.value, velocity, pipe.diameter());

        Ok(Self {
            velocity,
            reynolds,
            friction_factor,
            head_loss,
        })
    }
}
