//! Closed-form responses of the undisturbed first-order system.
//!
//! The complete response gates the forced term with the step mask but keeps
//! the forced term on absolute time: `free(t) + forced(t) * [t >= t_step]`,
//! not `forced(t - t_step)`. Downstream comparisons are made against that
//! exact shape, so it must not be "corrected" to the time-shifted form.

use cf_core::Real;
use cf_signals::StepInput;

use crate::grid::TimeGrid;
use crate::params::SystemCoefficients;

/// `v0 * exp(A t)`.
pub fn free_response(t: Real, v0: Real, decay_rate: Real) -> Real {
    v0 * (decay_rate * t).exp()
}

/// `B u0 / (-A)`, or zero for the degenerate `A == 0` case.
pub fn steady_state_velocity(decay_rate: Real, input_gain: Real, u0: Real) -> Real {
    if decay_rate != 0.0 {
        (input_gain * u0) / (-decay_rate)
    } else {
        0.0
    }
}

/// `v_ss * (1 - exp(A t))` from rest.
pub fn forced_response(t: Real, u0: Real, decay_rate: Real, input_gain: Real) -> Real {
    let v_ss = steady_state_velocity(decay_rate, input_gain, u0);
    v_ss * (1.0 - (decay_rate * t).exp())
}

/// Free response plus the step-gated forced response.
pub fn complete_response(t: Real, v0: Real, coeffs: &SystemCoefficients, step: &StepInput) -> Real {
    let a = coeffs.decay_rate;
    let mask = if step.is_active(t) { 1.0 } else { 0.0 };
    free_response(t, v0, a) + forced_response(t, step.amplitude, a, coeffs.input_gain) * mask
}

pub fn free_trace(grid: &TimeGrid, v0: Real, coeffs: &SystemCoefficients) -> Vec<Real> {
    let a = coeffs.decay_rate;
    grid.map(|t| free_response(t, v0, a))
}

pub fn forced_trace(grid: &TimeGrid, u0: Real, coeffs: &SystemCoefficients) -> Vec<Real> {
    let (a, b) = (coeffs.decay_rate, coeffs.input_gain);
    grid.map(|t| forced_response(t, u0, a, b))
}

pub fn complete_trace(
    grid: &TimeGrid,
    v0: Real,
    coeffs: &SystemCoefficients,
    step: &StepInput,
) -> Vec<Real> {
    grid.map(|t| complete_response(t, v0, coeffs, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PhysicalParameters;

    fn reference() -> SystemCoefficients {
        SystemCoefficients::derive(&PhysicalParameters::new(1600.0, 300.0, 50.0)).unwrap()
    }

    #[test]
    fn free_response_limits() {
        let c = reference();
        assert_eq!(free_response(0.0, 20.0, c.decay_rate), 20.0);
        assert!(free_response(1.0e3, 20.0, c.decay_rate).abs() < 1e-12);
        // one time constant: 1/e of the initial value
        let at_tau = free_response(c.time_constant, 20.0, c.decay_rate);
        assert!((at_tau - 20.0 / core::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn forced_response_limits() {
        let c = reference();
        let v_ss = steady_state_velocity(c.decay_rate, c.input_gain, 0.5);
        assert_eq!(v_ss, 0.03125 * 0.5 / 0.1875);
        assert_eq!(forced_response(0.0, 0.5, c.decay_rate, c.input_gain), 0.0);
        let late = forced_response(1.0e3, 0.5, c.decay_rate, c.input_gain);
        assert!((late - v_ss).abs() < 1e-12);
    }

    #[test]
    fn degenerate_decay_rate_has_zero_steady_state() {
        assert_eq!(steady_state_velocity(0.0, 0.5, 1.0), 0.0);
        assert_eq!(forced_response(3.0, 1.0, 0.0, 0.5), 0.0);
        // free response holds the initial value
        assert_eq!(free_response(3.0, 7.0, 0.0), 7.0);
    }

    #[test]
    fn complete_response_uses_unshifted_forced_term() {
        let c = reference();
        let step = StepInput::new(5.0, 0.5);
        let v0 = 20.0;

        let before = complete_response(4.99, v0, &c, &step);
        assert_eq!(before, free_response(4.99, v0, c.decay_rate));

        // at the step the forced term is evaluated at t = 5, not t - t_step = 0
        let at_step = complete_response(5.0, v0, &c, &step);
        let expected = free_response(5.0, v0, c.decay_rate)
            + forced_response(5.0, 0.5, c.decay_rate, c.input_gain);
        assert_eq!(at_step, expected);
        assert!(at_step > free_response(5.0, v0, c.decay_rate));
    }

    #[test]
    fn traces_follow_the_grid() {
        let c = reference();
        let grid = TimeGrid::new(25.0, 0.01).unwrap();
        let step = StepInput::new(5.0, 0.5);
        let free = free_trace(&grid, 20.0, &c);
        let forced = forced_trace(&grid, 0.5, &c);
        let complete = complete_trace(&grid, 20.0, &c, &step);
        assert_eq!(free.len(), grid.len());
        assert_eq!(forced.len(), grid.len());
        assert_eq!(complete.len(), grid.len());
        assert_eq!(complete[0], 20.0);
        for (i, &t) in grid.samples().iter().enumerate() {
            let mask = if t >= 5.0 { 1.0 } else { 0.0 };
            assert_eq!(complete[i], free[i] + forced[i] * mask);
        }
    }
}
