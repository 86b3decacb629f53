//! Gaussian pulse primitive used by the gust disturbance.

use cf_core::Real;
use serde::{Deserialize, Serialize};

/// Bell-shaped pulse `peak * exp(-0.5 * ((t - center) / width)^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianPulse {
    /// Time of the peak (s).
    pub center: Real,
    /// Value at `center`.
    pub peak: Real,
    /// Standard-deviation-like width (s).
    pub width: Real,
}

impl GaussianPulse {
    pub const fn new(center: Real, peak: Real, width: Real) -> Self {
        Self {
            center,
            peak,
            width,
        }
    }

    pub fn eval(&self, t: Real) -> Real {
        let z = (t - self.center) / self.width;
        self.peak * (-0.5 * z * z).exp()
    }
}

/// Wind gusts at 18 s (400 N) and 30 s (250 N).
pub const GUST_PULSES: [GaussianPulse; 2] = [
    GaussianPulse::new(18.0, 400.0, 1.0),
    GaussianPulse::new(30.0, 250.0, 0.6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_at_center() {
        let p = GaussianPulse::new(5.0, 12.0, 0.3);
        assert_eq!(p.eval(5.0), 12.0);
    }

    #[test]
    fn symmetric_about_center() {
        let p = GaussianPulse::new(18.0, 400.0, 1.0);
        assert_eq!(p.eval(17.0), p.eval(19.0));
        // one width away: exp(-0.5)
        assert!((p.eval(19.0) - 400.0 * (-0.5_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn decays_far_from_center() {
        let p = GUST_PULSES[1];
        assert!(p.eval(0.0) < 1e-100);
    }
}
