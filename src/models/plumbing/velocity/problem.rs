//! Problem formulation for matching a target head loss.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, Velocity},
    length::foot,
    velocity::foot_per_second,
};

use crate::support::hydraulics::{
    FlowState, FluidProperties, FrictionFactorConfig, FrictionFactorError, PipeSpec,
};

/// Model adapter exposing velocity as the sole input of a pipe flow evaluation.
pub(super) struct VelocityModel<'a> {
    pipe: &'a PipeSpec,
    fluid: &'a FluidProperties,
    friction: &'a FrictionFactorConfig,
}

impl<'a> VelocityModel<'a> {
    pub(super) fn new(
        pipe: &'a PipeSpec,
        fluid: &'a FluidProperties,
        friction: &'a FrictionFactorConfig,
    ) -> Self {
        Self {
            pipe,
            fluid,
            friction,
        }
    }
}

impl Model for VelocityModel<'_> {
    type Input = Velocity;
    type Output = FlowState;
    type Error = FrictionFactorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        FlowState::evaluate(*input, self.pipe, self.fluid, self.friction)
    }
}

/// Equation problem definition for head loss matching.
///
/// Computes the residual as `achieved_head_loss - target_head_loss`, in feet.
pub(super) struct VelocityProblem {
    target: Length,
}

impl VelocityProblem {
    pub(super) fn new(target: Length) -> Self {
        Self { target }
    }

    /// Returns the residual for an already evaluated flow state.
    pub(super) fn residual(&self, state: &FlowState) -> f64 {
        (state.head_loss - self.target).get::<foot>()
    }
}

impl EquationProblem<1> for VelocityProblem {
    type Input = Velocity;
    type Output = FlowState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Velocity::new::<foot_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
