//! # Supply Sizing
//!
//! Water-supply pipe sizing by friction rate, velocity limit, and fixture units,
//! following the Appendix A method of the Uniform Plumbing Code.
//!
//! Given the pressure available for friction over a developed length, each
//! candidate pipe size is solved for the velocity that consumes exactly that
//! friction budget, capped at a maximum velocity, and converted to a flow in
//! GPM and a fixture-unit capacity.
//!
//! ## Crate layout
//!
//! - [`models`]: The velocity solver, the fixture-unit table, and per-size sizing.
//! - [`support`]: Hydraulic formulas, unit helpers, and numeric constraints.
//!
//! ## Errors
//!
//! Every failure is returned as a typed error. Iterative solvers report
//! non-convergence explicitly rather than returning their last iterate, and
//! sizing a list of pipes reports a failure per pipe without abandoning the rest.

pub mod models;
pub mod support;
