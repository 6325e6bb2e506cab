//! Water-supply pipe sizing.
//!
//! - [`velocity`]: Velocity that produces a target head loss per 100 ft.
//! - [`fixture_units`]: Fixture-unit capacity of a flow.
//! - [`copper`]: Type L copper tube sizes.
//! - [`sizing`]: Friction rate, velocity limit and fixture units for every
//!   candidate tube of a service.

pub mod copper;
pub mod fixture_units;
pub mod sizing;
pub mod velocity;

pub use fixture_units::{FixtureUnitError, FixtureUnitTable, FlushType};
pub use sizing::{ServiceDesign, ServiceSizing, SizedPipe, SizingConfig, SizingError, size_service};
pub use velocity::{VelocityConfig, VelocityError, VelocitySolution, solve_velocity};
