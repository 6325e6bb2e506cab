//! Per-size evaluation of a water service.
//!
//! A service is described by the pressure available for friction losses, the
//! developed length of the run, a design velocity limit, and the flush type of
//! the fixtures served. Every candidate tube runs at the velocity that
//! consumes the whole friction budget, or at the limit if that is lower, and
//! is converted to a flow and a fixture-unit capacity.
//!
//! A tube that cannot be evaluated produces an `Err` row; the remaining tubes
//! are still sized.

use log::{debug, warn};
use num_traits::Zero;
use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::{Length, Pressure, Velocity},
    length::foot,
    velocity::foot_per_second,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    hydraulics::{FlowState, FluidProperties, FrictionFactorError, REFERENCE_LENGTH_FT},
    units::{gpm_from_velocity, psi_to_head},
};

use super::{
    copper::{CopperTube, copper_roughness},
    fixture_units::{FixtureUnitError, FixtureUnitTable, FlushType},
    velocity::{VelocityConfig, VelocityError, solve_velocity},
};

/// Suggested velocity limit for cold water, in ft/s.
pub const COLD_WATER_MAX_VELOCITY_FPS: f64 = 8.0;

/// Suggested velocity limit for hot water, in ft/s.
pub const HOT_WATER_MAX_VELOCITY_FPS: f64 = 5.0;

/// Velocity above which copper supply piping exceeds code limits, in ft/s.
pub const CODE_MAX_VELOCITY_FPS: f64 = 10.0;

/// Returns the head loss per 100 ft available from a pressure budget.
///
/// `rate = psi × 2.31 / length × 100`.
#[must_use]
pub fn friction_rate(
    available_pressure: Constrained<Pressure, StrictlyPositive>,
    developed_length: Constrained<Length, StrictlyPositive>,
) -> Length {
    let head = psi_to_head(available_pressure.into_inner()).get::<foot>();
    let length = developed_length.into_inner().get::<foot>();
    Length::new::<foot>(head / length * REFERENCE_LENGTH_FT)
}

/// Design inputs for one water service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceDesign {
    /// Pressure available for friction losses.
    pub available_pressure: Pressure,

    /// Developed length of the run.
    pub developed_length: Length,

    /// Velocity limit applied after solving.
    pub max_velocity: Velocity,

    /// Fixture-unit column to report.
    pub flush_type: FlushType,
}

impl ServiceDesign {
    /// A cold-water service.
    #[must_use]
    pub fn cold_water(
        available_pressure: Pressure,
        developed_length: Length,
        max_velocity: Velocity,
        flush_type: FlushType,
    ) -> Self {
        Self {
            available_pressure,
            developed_length,
            max_velocity,
            flush_type,
        }
    }

    /// A hot-water service.
    ///
    /// Flushometer valves are never on hot water, so tank units are reported.
    #[must_use]
    pub fn hot_water(
        available_pressure: Pressure,
        developed_length: Length,
        max_velocity: Velocity,
    ) -> Self {
        Self::cold_water(
            available_pressure,
            developed_length,
            max_velocity,
            FlushType::Tank,
        )
    }
}

/// Configuration for sizing a service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConfig {
    /// Absolute roughness of the tube wall.
    pub roughness: Length,

    /// Conveyed liquid.
    pub fluid: FluidProperties,

    /// Starting point for the velocity bracket.
    pub velocity_guess: Velocity,

    /// Velocity solver configuration.
    pub velocity: VelocityConfig,
}

impl Default for SizingConfig {
    /// Copper tube carrying water at 60°F.
    fn default() -> Self {
        Self {
            roughness: copper_roughness(),
            fluid: FluidProperties::water_60f(),
            velocity_guess: Velocity::new::<foot_per_second>(5.0),
            velocity: VelocityConfig::default(),
        }
    }
}

/// Errors that can occur while sizing a service or one of its tubes.
#[derive(Debug, Error)]
pub enum SizingError {
    /// An input failed validation.
    #[error("invalid {field}")]
    InvalidInput {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The velocity solve failed.
    #[error("velocity solve failed")]
    Velocity(#[from] VelocityError),

    /// Evaluating the flow at the velocity limit failed.
    #[error("flow evaluation at the velocity limit failed")]
    FrictionFactor(#[from] FrictionFactorError),
}

/// One tube evaluated against a service.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedPipe {
    /// The tube evaluated.
    pub tube: CopperTube,

    /// Velocity that consumes the whole friction budget.
    ///
    /// `None` when the velocity limit is reached first, in which case the
    /// budget is never fully used and no root is solved for.
    pub solved_velocity: Option<Velocity>,

    /// Whether the design velocity is the velocity limit.
    pub velocity_limited: bool,

    /// Flow state at the design velocity.
    pub flow: FlowState,

    /// Flow at the design velocity, in GPM.
    pub gpm: f64,

    /// Fixture-unit capacity at that flow.
    pub fixture_units: Result<u32, FixtureUnitError>,
}

/// Result of sizing a service across a set of tubes.
#[derive(Debug)]
pub struct ServiceSizing {
    /// Head loss per 100 ft available from the pressure budget.
    pub friction_rate: Length,

    /// One row per tube, in the order given.
    pub pipes: Vec<Result<SizedPipe, SizingError>>,
}

/// Sizes a service for each of `tubes`.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if the available pressure, developed
/// length, or velocity limit is not strictly positive. Failures for an
/// individual tube are returned in its row of [`ServiceSizing::pipes`].
pub fn size_service(
    design: &ServiceDesign,
    tubes: &[CopperTube],
    table: &FixtureUnitTable,
    config: &SizingConfig,
) -> Result<ServiceSizing, SizingError> {
    let available_pressure = validate(design.available_pressure, "available pressure")?;
    let developed_length = validate(design.developed_length, "developed length")?;
    let max_velocity = validate(design.max_velocity, "maximum velocity")?.into_inner();

    if max_velocity.get::<foot_per_second>() > CODE_MAX_VELOCITY_FPS {
        warn!(
            "maximum velocity {} ft/s exceeds the {CODE_MAX_VELOCITY_FPS} ft/s code limit",
            max_velocity.get::<foot_per_second>()
        );
    }

    let rate = friction_rate(available_pressure, developed_length);
    let target = validate(rate, "friction rate")?;

    debug!("sizing {} tubes at {:.4} ft/100 ft", tubes.len(), rate.get::<foot>());

    let pipes = tubes
        .iter()
        .map(|tube| size_tube(tube, target, max_velocity, design.flush_type, table, config))
        .collect();

    Ok(ServiceSizing {
        friction_rate: rate,
        pipes,
    })
}

fn size_tube(
    tube: &CopperTube,
    target: Constrained<Length, StrictlyPositive>,
    max_velocity: Velocity,
    flush_type: FlushType,
    table: &FixtureUnitTable,
    config: &SizingConfig,
) -> Result<SizedPipe, SizingError> {
    let pipe = tube
        .pipe(config.roughness)
        .map_err(|source| SizingError::InvalidInput {
            field: "tube geometry",
            source,
        })?;

    // Head loss rises with velocity, so the limit applies whenever the limit
    // itself stays within the budget; the unconstrained root is not needed.
    let at_limit = FlowState::evaluate(
        max_velocity,
        &pipe,
        &config.fluid,
        &config.velocity.friction,
    )?;

    let (flow, solved_velocity) = if at_limit.head_loss <= *target.as_ref() {
        (at_limit, None)
    } else {
        let solution = solve_velocity(
            target,
            &pipe,
            &config.fluid,
            config.velocity_guess,
            &config.velocity,
        )?;
        (solution.flow, Some(solution.flow.velocity))
    };
    let velocity_limited = solved_velocity.is_none();

    let gpm = gpm_from_velocity(flow.velocity, pipe.diameter());
    let fixture_units = table.fixture_units(gpm, flush_type);

    debug!(
        "{} in: {:.3} ft/s ({}), {gpm:.2} GPM, {fixture_units:?} fixture units",
        tube.nominal,
        flow.velocity.get::<foot_per_second>(),
        if velocity_limited { "limited" } else { "unlimited" },
    );

    Ok(SizedPipe {
        tube: *tube,
        solved_velocity,
        velocity_limited,
        flow,
        gpm,
        fixture_units,
    })
}

fn validate<T>(
    value: T,
    field: &'static str,
) -> Result<Constrained<T, StrictlyPositive>, SizingError>
where
    T: PartialOrd + Zero,
{
    StrictlyPositive::new(value).map_err(|source| SizingError::InvalidInput { field, source })
}

/// Sizing of a fixed set of tubes against a fixture-unit table, as a [`Model`].
///
/// # Example
///
/// ```
/// use supply_sizing::models::plumbing::{
///     copper::TYPE_L,
///     fixture_units::FixtureUnitTable,
///     sizing::{ServiceDesign, SizingConfig, SupplySizing},
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Length, Pressure, Velocity},
///     length::foot,
///     pressure::psi,
///     velocity::foot_per_second,
/// };
///
/// let table = FixtureUnitTable::upc_2021().unwrap();
/// let sizing = SupplySizing::new(&TYPE_L, &table, SizingConfig::default());
///
/// let design = ServiceDesign::hot_water(
///     Pressure::new::<psi>(10.0),
///     Length::new::<foot>(150.0),
///     Velocity::new::<foot_per_second>(5.0),
/// );
///
/// let result = sizing.call(&design).unwrap();
/// assert_eq!(result.pipes.len(), TYPE_L.len());
/// assert!(result.pipes.iter().all(Result::is_ok));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SupplySizing<'a> {
    tubes: &'a [CopperTube],
    table: &'a FixtureUnitTable,
    config: SizingConfig,
}

impl<'a> SupplySizing<'a> {
    #[must_use]
    pub fn new(tubes: &'a [CopperTube], table: &'a FixtureUnitTable, config: SizingConfig) -> Self {
        Self {
            tubes,
            table,
            config,
        }
    }
}

impl Model for SupplySizing<'_> {
    type Input = ServiceDesign;
    type Output = ServiceSizing;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size_service(input, self.tubes, self.table, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::psi;

    use crate::models::plumbing::copper::TYPE_L;

    fn cold(pressure_psi: f64, length_ft: f64, flush_type: FlushType) -> ServiceDesign {
        ServiceDesign::cold_water(
            Pressure::new::<psi>(pressure_psi),
            Length::new::<foot>(length_ft),
            Velocity::new::<foot_per_second>(COLD_WATER_MAX_VELOCITY_FPS),
            flush_type,
        )
    }

    fn size(design: &ServiceDesign, tubes: &[CopperTube]) -> ServiceSizing {
        size_service(
            design,
            tubes,
            &FixtureUnitTable::upc_2021().unwrap(),
            &SizingConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn friction_rate_from_pressure_and_length() {
        let rate = friction_rate(
            StrictlyPositive::new(Pressure::new::<psi>(20.0)).unwrap(),
            StrictlyPositive::new(Length::new::<foot>(100.0)).unwrap(),
        );
        assert_relative_eq!(rate.get::<foot>(), 46.2, max_relative = 1e-9);
    }

    #[test]
    fn small_tube_uses_the_whole_budget() {
        let sizing = size(&cold(5.0, 200.0, FlushType::Tank), &TYPE_L[..1]);
        assert_relative_eq!(sizing.friction_rate.get::<foot>(), 5.775, max_relative = 1e-9);

        let pipe = sizing.pipes[0].as_ref().unwrap();
        assert!(!pipe.velocity_limited);
        assert_eq!(pipe.solved_velocity, Some(pipe.flow.velocity));
        assert_relative_eq!(pipe.flow.head_loss.get::<foot>(), 5.775, epsilon = 1e-8);
        assert_relative_eq!(
            pipe.gpm,
            pipe.flow.velocity.get::<foot_per_second>() * 0.545 * 0.545 / 0.4084,
            max_relative = 1e-9
        );
        assert!(pipe.fixture_units.is_ok());
    }

    #[test]
    fn large_tube_is_velocity_limited() {
        let sizing = size(&cold(5.0, 200.0, FlushType::Tank), &TYPE_L);
        let largest = sizing.pipes.last().unwrap().as_ref().unwrap();

        assert!(largest.velocity_limited);
        assert_eq!(largest.solved_velocity, None);
        assert_relative_eq!(
            largest.flow.velocity.get::<foot_per_second>(),
            COLD_WATER_MAX_VELOCITY_FPS,
            max_relative = 1e-12
        );
        // Capping the velocity leaves part of the friction budget unused.
        assert!(largest.flow.head_loss < sizing.friction_rate);
    }

    #[test]
    fn short_high_pressure_run_is_velocity_limited() {
        // 577.5 ft/100 ft would need about 105 ft/s in the 4" tube.
        let sizing = size(&cold(50.0, 20.0, FlushType::Tank), &TYPE_L);
        assert_relative_eq!(sizing.friction_rate.get::<foot>(), 577.5, max_relative = 1e-9);

        for row in &sizing.pipes {
            let pipe = row.as_ref().unwrap();
            assert!(pipe.velocity_limited, "{} in not limited", pipe.tube.nominal);
            assert_relative_eq!(
                pipe.flow.velocity.get::<foot_per_second>(),
                COLD_WATER_MAX_VELOCITY_FPS,
                max_relative = 1e-12
            );
            assert!(pipe.flow.head_loss < sizing.friction_rate);
        }
    }

    #[test]
    fn capacity_grows_with_size() {
        let sizing = size(&cold(5.0, 200.0, FlushType::Tank), &TYPE_L);
        let gpms: Vec<f64> = sizing
            .pipes
            .iter()
            .map(|row| row.as_ref().unwrap().gpm)
            .collect();
        assert!(gpms.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn small_tube_valve_units_need_larger_pipe() {
        let sizing = size(&cold(5.0, 200.0, FlushType::Valve), &TYPE_L[..1]);
        let pipe = sizing.pipes[0].as_ref().unwrap();
        assert!(pipe.gpm < 21.0);
        assert!(matches!(
            pipe.fixture_units,
            Err(FixtureUnitError::UseLargerPipe { .. })
        ));
    }

    #[test]
    fn hot_water_reports_tank_units() {
        let design = ServiceDesign::hot_water(
            Pressure::new::<psi>(5.0),
            Length::new::<foot>(200.0),
            Velocity::new::<foot_per_second>(HOT_WATER_MAX_VELOCITY_FPS),
        );
        assert_eq!(design.flush_type, FlushType::Tank);

        let sizing = size(&design, &TYPE_L[..1]);
        assert!(sizing.pipes[0].as_ref().unwrap().fixture_units.is_ok());
    }

    #[test]
    fn failing_tube_does_not_abort_others() {
        let bad = CopperTube {
            nominal: "none",
            nominal_inches: 0.0,
            inside_diameter_inches: 0.0,
        };
        let sizing = size(
            &cold(5.0, 200.0, FlushType::Tank),
            &[TYPE_L[0], bad, TYPE_L[1]],
        );

        assert!(sizing.pipes[0].is_ok());
        assert!(matches!(
            sizing.pipes[1],
            Err(SizingError::InvalidInput {
                field: "tube geometry",
                source: ConstraintError::Zero
            })
        ));
        assert!(sizing.pipes[2].is_ok());
    }

    #[test]
    fn invalid_design_is_rejected() {
        let table = FixtureUnitTable::upc_2021().unwrap();
        let config = SizingConfig::default();

        let result = size_service(&cold(0.0, 200.0, FlushType::Tank), &TYPE_L, &table, &config);
        assert!(matches!(
            result,
            Err(SizingError::InvalidInput {
                field: "available pressure",
                source: ConstraintError::Zero
            })
        ));

        let result = size_service(&cold(5.0, -1.0, FlushType::Tank), &TYPE_L, &table, &config);
        assert!(matches!(
            result,
            Err(SizingError::InvalidInput {
                field: "developed length",
                source: ConstraintError::Negative
            })
        ));
    }

    #[test]
    fn model_matches_function() {
        let table = FixtureUnitTable::upc_2021().unwrap();
        let design = cold(8.0, 120.0, FlushType::Valve);
        let from_model = SupplySizing::new(&TYPE_L, &table, SizingConfig::default())
            .call(&design)
            .unwrap();
        let direct = size_service(&design, &TYPE_L, &table, &SizingConfig::default()).unwrap();

        assert_eq!(from_model.friction_rate, direct.friction_rate);
        for (a, b) in from_model.pipes.iter().zip(&direct.pipes) {
            assert_eq!(a.as_ref().unwrap(), b.as_ref().unwrap());
        }
    }
}
