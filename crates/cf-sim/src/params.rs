//! Physical vehicle parameters and the first-order coefficients derived
//! from them.
//!
//! Model: `m * dv/dt = -b * v + k_u * u`, i.e. `dv/dt = A * v + B * u` with
//! `A = -b/m`, `B = k_u/m` and time constant `T = m/b`.

use std::fmt;

use cf_core::units::{DragCoeff, Force, Mass};
use cf_core::{CfError, Real, ensure_positive};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Vehicle inputs in SI units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Vehicle mass (kg)
    pub mass: Real,
    /// Linear drag coefficient (N·s/m)
    pub drag_coefficient: Real,
    /// Force per throttle unit (N)
    pub force_gain: Real,
}

impl PhysicalParameters {
    pub fn new(mass: Real, drag_coefficient: Real, force_gain: Real) -> Self {
        Self {
            mass,
            drag_coefficient,
            force_gain,
        }
    }

    /// Build from typed quantities.
    pub fn from_units(mass: Mass, drag: DragCoeff, force_gain: Force) -> Self {
        use uom::si::force::newton;
        use uom::si::mass::kilogram;
        use uom::si::mass_rate::kilogram_per_second;
        Self {
            mass: mass.get::<kilogram>(),
            drag_coefficient: drag.get::<kilogram_per_second>(),
            force_gain: force_gain.get::<newton>(),
        }
    }

    /// Reject non-positive mass or drag coefficient.
    pub fn validate(&self) -> SimResult<()> {
        positive(self.mass, "mass")?;
        positive(self.drag_coefficient, "drag_coefficient")?;
        Ok(())
    }
}

fn positive(value: Real, what: &'static str) -> SimResult<Real> {
    ensure_positive(value, what).map_err(|e| match e {
        CfError::NonPositive { what, value } | CfError::NonFinite { what, value } => {
            SimError::InvalidParameter { what, value }
        }
        other => other.into(),
    })
}

/// Stability of the undriven system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    Stable,
    Unstable,
}

impl Stability {
    pub fn label(self) -> &'static str {
        match self {
            Stability::Stable => "Stable",
            Stability::Unstable => "Unstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State-space coefficients of `dv/dt = A v + B u`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemCoefficients {
    /// A = -b/m (1/s)
    pub decay_rate: Real,
    /// B = k_u/m
    pub input_gain: Real,
    /// T = m/b (s)
    pub time_constant: Real,
}

impl SystemCoefficients {
    /// Derive coefficients from physical parameters.
    ///
    /// Fails with [`SimError::InvalidParameter`] for non-positive mass or drag.
    pub fn derive(params: &PhysicalParameters) -> SimResult<Self> {
        params.validate()?;
        let m = params.mass;
        let b = params.drag_coefficient;
        let coeffs = Self {
            decay_rate: -b / m,
            input_gain: params.force_gain / m,
            time_constant: m / b,
        };
        tracing::debug!(
            a = coeffs.decay_rate,
            b = coeffs.input_gain,
            tau = coeffs.time_constant,
            "derived system coefficients"
        );
        Ok(coeffs)
    }

    /// Coefficients straight from `A` and `B`, with `T = -1/A`.
    ///
    /// No validation: `A == 0` gives an infinite time constant and is the
    /// degenerate case handled by the response and metrics code.
    pub fn from_rates(decay_rate: Real, input_gain: Real) -> Self {
        Self {
            decay_rate,
            input_gain,
            time_constant: -1.0 / decay_rate,
        }
    }

    pub fn is_stable(&self) -> bool {
        self.decay_rate < 0.0
    }

    pub fn stability(&self) -> Stability {
        if self.is_stable() {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use cf_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn time_constant_times_decay_rate_is_minus_one(
            m in 1.0_f64..1.0e5,
            b in 1.0e-3_f64..1.0e4,
            k in 0.0_f64..1.0e3,
        ) {
            let c = SystemCoefficients::derive(&PhysicalParameters::new(m, b, k)).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(c.time_constant * c.decay_rate, -1.0, tol));
            prop_assert!(c.is_stable());
        }
    }
}
