//! Run pipeline: scenario in, every array and scalar a front end needs out.

use std::time::Instant;

use cf_core::Real;
use cf_signals::{DisturbanceWindow, gust_disturbance, slope, throttle};
use cf_sim::{
    DisturbedVelocityModel, Metrics, Stability, SystemCoefficients, TimeGrid, complete_trace,
    simulate_disturbed,
};
use serde::{Deserialize, Serialize};

use crate::config::{Scenario, validate_scenario};
use crate::error::AppResult;

/// Output of one analysis run. Owns all of its buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub scenario: Scenario,
    pub coefficients: SystemCoefficients,
    pub stability: Stability,
    pub metrics: Metrics,
    /// Time samples (s)
    pub time: Vec<Real>,
    /// Throttle/torque input driving the disturbed model
    pub throttle: Vec<Real>,
    /// Road slope (rad)
    pub slope: Vec<Real>,
    /// Wind-gust force for display (N)
    pub gust_disturbance: Vec<Real>,
    /// Grade fraction loading the disturbed model
    pub grade_disturbance: Vec<Real>,
    /// Undisturbed free + step-gated forced response (m/s)
    pub complete_response: Vec<Real>,
    /// Euler-integrated response under throttle and grade load (m/s)
    pub disturbed_response: Vec<Real>,
    pub disturbance_window: DisturbanceWindow,
}

impl RunOutput {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Run the full analysis for `scenario`.
///
/// Validation happens before any computation; after that the run cannot
/// fail except through numeric overflow, which is left in the traces.
pub fn run_analysis(scenario: &Scenario) -> AppResult<RunOutput> {
    validate_scenario(scenario)?;
    let start = Instant::now();

    let params = scenario.physical_parameters();
    let sim = &scenario.simulation;
    let coefficients = SystemCoefficients::derive(&params)?;
    let grid = TimeGrid::new(sim.t_sim_s, sim.dt_s)?;

    let step = sim.step_input();
    let window = DisturbanceWindow::for_duration(sim.t_sim_s);

    let throttle_trace = grid.map(throttle);
    let slope_trace = grid.map(slope);
    let gust_trace = grid.map(gust_disturbance);
    let grade_trace = grid.map(|t| window.eval(t));

    let complete = complete_trace(&grid, sim.v0_mps, &coefficients, &step);

    let mut model =
        DisturbedVelocityModel::new(params, sim.v0_mps, sim.t_sim_s)?.with_window(window);
    let disturbed = simulate_disturbed(&mut model, &grid)?;

    let metrics = Metrics::compute(&coefficients, sim.step_amplitude);

    tracing::info!(
        samples = grid.len(),
        tau_s = metrics.time_constant,
        v_ss = metrics.steady_state_velocity,
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "analysis run complete"
    );

    Ok(RunOutput {
        scenario: *scenario,
        coefficients,
        stability: coefficients.stability(),
        metrics,
        time: grid.into_samples(),
        throttle: throttle_trace,
        slope: slope_trace,
        gust_disturbance: gust_trace,
        grade_disturbance: grade_trace,
        complete_response: complete,
        disturbed_response: disturbed,
        disturbance_window: window,
    })
}
