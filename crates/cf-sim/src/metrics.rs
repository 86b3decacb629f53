//! First-order response metrics.

use cf_core::Real;
use serde::{Deserialize, Serialize};

use crate::params::SystemCoefficients;
use crate::response::steady_state_velocity;

/// Settling time expressed in time constants (about 99.3% of the final value).
pub const SETTLING_TIME_CONSTANTS: Real = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// T = -1/A (s)
    pub time_constant: Real,
    /// Final velocity for a constant step input (m/s)
    pub steady_state_velocity: Real,
    /// 5 T (s)
    pub settling_time: Real,
}

impl Metrics {
    pub fn compute(coeffs: &SystemCoefficients, step_amplitude: Real) -> Self {
        let time_constant = coeffs.time_constant;
        Self {
            time_constant,
            steady_state_velocity: steady_state_velocity(
                coeffs.decay_rate,
                coeffs.input_gain,
                step_amplitude,
            ),
            settling_time: SETTLING_TIME_CONSTANTS * time_constant,
        }
    }
}
