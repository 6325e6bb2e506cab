use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_foot,
        f64::{Area, Time},
        time::second,
    },
    typenum::{N1, P2, Z0},
};

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Constructs a kinematic viscosity from a value in ft²/s.
#[must_use]
pub fn kinematic_viscosity_from_ft2_per_s(value: f64) -> KinematicViscosity {
    Area::new::<square_foot>(value) / Time::new::<second>(1.0)
}
