//! Velocity model with a grade disturbance acting as extra drag.
//!
//! Inside the disturbance window the drag coefficient becomes
//! `b + w * m * g`, giving a time-varying decay rate
//! `A_eff(t) = -(b + w(t) * m * g) / m`. The state is advanced with
//! `dv/dt = A_eff(t) * v + B * u(t)`, where `u` defaults to the throttle
//! profile.
//!
//! The Gaussian gust profile in `cf-signals` is a separate display signal and
//! does not feed this model.

use cf_core::Real;
use cf_core::units::constants::G_MPS2;
use cf_signals::{DisturbanceWindow, InputSignal};

use crate::error::SimResult;
use crate::grid::TimeGrid;
use crate::integrator::ForwardEuler;
use crate::model::TransientModel;
use crate::params::{PhysicalParameters, SystemCoefficients};
use crate::sim::run_on_grid;

#[derive(Clone, Debug)]
pub struct DisturbedVelocityModel {
    params: PhysicalParameters,
    coeffs: SystemCoefficients,
    v0: Real,
    input: InputSignal,
    window: DisturbanceWindow,
}

impl DisturbedVelocityModel {
    /// Throttle-driven model with the standard 30%-70% grade window for a run
    /// of length `t_sim`.
    pub fn new(params: PhysicalParameters, v0: Real, t_sim: Real) -> SimResult<Self> {
        let coeffs = SystemCoefficients::derive(&params)?;
        Ok(Self {
            params,
            coeffs,
            v0,
            input: InputSignal::default(),
            window: DisturbanceWindow::for_duration(t_sim),
        })
    }

    pub fn with_input(mut self, input: impl Into<InputSignal>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_window(mut self, window: DisturbanceWindow) -> Self {
        self.window = window;
        self
    }

    /// Drop the grade load entirely.
    pub fn undisturbed(self) -> Self {
        self.with_window(DisturbanceWindow::none())
    }

    pub fn coefficients(&self) -> &SystemCoefficients {
        &self.coeffs
    }

    pub fn window(&self) -> &DisturbanceWindow {
        &self.window
    }

    pub fn input(&self) -> &InputSignal {
        &self.input
    }

    /// `A_eff(t) = -(b + w(t) m g) / m`.
    pub fn effective_decay_rate(&self, t: Real) -> Real {
        let m = self.params.mass;
        let b_eff = self.params.drag_coefficient + self.window.eval(t) * m * G_MPS2;
        -b_eff / m
    }
}

impl TransientModel for DisturbedVelocityModel {
    type State = Real;

    fn initial_state(&self) -> Real {
        self.v0
    }

    fn rhs(&mut self, t: f64, v: &Real) -> SimResult<Real> {
        Ok(self.effective_decay_rate(t) * v + self.coeffs.input_gain * self.input.eval(t))
    }

    fn add(&self, a: &Real, b: &Real) -> Real {
        a + b
    }

    fn scale(&self, a: &Real, scale: f64) -> Real {
        a * scale
    }
}

/// Explicit-Euler velocity trace of `model` over `grid`.
///
/// Divergence is not corrected; a non-finite result is only logged. Such a
/// trace exports to JSON with `null` in place of the non-finite samples and
/// cannot be read back as a `RunOutput`.
pub fn simulate_disturbed(
    model: &mut DisturbedVelocityModel,
    grid: &TimeGrid,
) -> SimResult<Vec<Real>> {
    let record = run_on_grid(model, &ForwardEuler, grid)?;
    match record.x.last() {
        Some(last) if !last.is_finite() => {
            tracing::warn!(
                value = *last,
                dt = grid.nominal_dt(),
                "disturbed trace diverged; explicit Euler step too large for this load"
            );
        }
        _ => {}
    }
    Ok(record.x)
}
