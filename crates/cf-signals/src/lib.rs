//! Exogenous signal generators for cruiseflow.
//!
//! Every generator is a stateless function of time. The same function can
//! be evaluated at a single instant or sampled over a whole time grid, and
//! both paths produce identical values.
//!
//! # Signals
//!
//! - **Throttle**: additive step profile (torque/throttle units)
//! - **Slope**: piecewise-constant road grade angle (radians)
//! - **Gust disturbance**: two Gaussian wind gusts (N), used for display
//! - **Grade window**: constant grade fraction over a closed time window,
//!   used to load the disturbed integrator
//! - **Step input**: single step of configurable amplitude and time

pub mod error;
pub mod profile;
pub mod pulse;
pub mod sample;
pub mod step;

pub use error::{SignalError, SignalResult};
pub use profile::{InputSignal, Profile, SignalFn, gust_disturbance, slope, throttle};
pub use pulse::{GUST_PULSES, GaussianPulse};
pub use sample::{sample, sample_par};
pub use step::{DisturbanceWindow, StepInput};
