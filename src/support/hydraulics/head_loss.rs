use uom::si::{
    f64::{Length, Ratio, Velocity},
    length::foot,
    ratio::ratio,
};

use crate::support::units::gravity;

/// Pipe length, in feet, over which head loss is reported.
pub const REFERENCE_LENGTH_FT: f64 = 100.0;

/// Returns the Darcy–Weisbach head loss over 100 ft of pipe.
///
/// `h_f = f · L · v² / (D · 2g)` with `L = 100 ft` and `g = 32.174 ft/s²`.
/// The result is a head of the flowing liquid, conventionally read as
/// "feet per 100 feet".
///
/// The caller guarantees a positive diameter, which
/// [`PipeSpec`](super::PipeSpec) enforces.
#[must_use]
pub fn head_loss_per_100(friction_factor: f64, velocity: Velocity, diameter: Length) -> Length {
    let slenderness: Ratio = Length::new::<foot>(REFERENCE_LENGTH_FT) / diameter;
    let velocity_head: Length = velocity * velocity / (gravity() * 2.0);
    velocity_head * (friction_factor * slenderness.get::<ratio>())
}
