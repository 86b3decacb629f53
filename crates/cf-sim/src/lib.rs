//! First-order vehicle speed simulation.
//!
//! Provides:
//! - Parameter derivation (`m`, `b`, `k_u` -> `A`, `B`, `T`)
//! - Uniform time grids
//! - Closed-form free, forced and complete responses
//! - Fixed-step explicit Euler integration over a grid
//! - Disturbance-coupled velocity model (grade window as added drag)
//! - First-order metrics (time constant, steady state, settling time)

pub mod disturbed;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod metrics;
pub mod model;
pub mod params;
pub mod response;
pub mod sim;

pub use disturbed::{DisturbedVelocityModel, simulate_disturbed};
pub use error::{SimError, SimResult};
pub use grid::{DEFAULT_DT, MAX_GRID_SAMPLES, TimeGrid};
pub use integrator::{ForwardEuler, Integrator};
pub use metrics::{Metrics, SETTLING_TIME_CONSTANTS};
pub use model::TransientModel;
pub use params::{PhysicalParameters, Stability, SystemCoefficients};
pub use response::{
    complete_response, complete_trace, forced_response, forced_trace, free_response, free_trace,
    steady_state_velocity,
};
pub use sim::{SimRecord, run_on_grid};
