//! Supporting utilities used by the sizing models.
//!
//! - [`constraint`]: Type-level numeric invariants for validated inputs.
//! - [`hydraulics`]: Reynolds number, friction factor, and head loss.
//! - [`units`]: [`uom`] extensions and fixed plumbing-code conversion factors.

pub mod constraint;
pub mod hydraulics;
pub mod units;
