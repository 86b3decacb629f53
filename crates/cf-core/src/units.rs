// cf-core/src/units.rs

use uom::si::f64::{Force as UomForce, Mass as UomMass, MassRate as UomMassRate};

// Public canonical unit types (SI, f64)
pub type Force = UomForce;
pub type Mass = UomMass;
/// Linear drag coefficient. N·s/m reduces to kg/s.
pub type DragCoeff = UomMassRate;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn n_s_per_m(v: f64) -> DragCoeff {
    use uom::si::mass_rate::kilogram_per_second;
    DragCoeff::new::<kilogram_per_second>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

/// Degrees to radians as `deg * π / 180`.
#[inline]
pub fn deg_to_rad(v: f64) -> f64 {
    v * core::f64::consts::PI / 180.0
}

pub mod constants {
    /// Gravitational acceleration used by the grade-drag model (m/s²).
    pub const G_MPS2: f64 = 9.81;
}
