//! Uniform simulation time grid.

use cf_core::{Real, ensure_positive, linspace};
use cf_signals::{sample, sample_par};

use crate::error::{SimError, SimResult};

/// Nominal time step (s).
pub const DEFAULT_DT: Real = 0.01;

/// Grids at least this long are sampled on the rayon pool.
const PARALLEL_SAMPLE_THRESHOLD: usize = 16_384;

/// Largest grid [`TimeGrid::new`] will allocate.
pub const MAX_GRID_SAMPLES: usize = 10_000_000;

/// Ordered time samples starting at zero.
///
/// `len = floor(t_sim / dt)` samples spread over the closed interval
/// `[0, t_sim]`, so the realised spacing is `t_sim / (len - 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    samples: Vec<Real>,
    duration: Real,
    nominal_dt: Real,
}

impl TimeGrid {
    pub fn new(t_sim: Real, dt: Real) -> SimResult<Self> {
        let t_sim = ensure_positive(t_sim, "t_sim").map_err(|_| SimError::InvalidArg {
            what: "t_sim must be positive and finite",
        })?;
        let dt = ensure_positive(dt, "dt").map_err(|_| SimError::InvalidArg {
            what: "dt must be positive and finite",
        })?;
        let n = (t_sim / dt).floor();
        if n < 2.0 {
            return Err(SimError::InvalidArg {
                what: "time grid needs at least two samples (t_sim / dt >= 2)",
            });
        }
        if n > MAX_GRID_SAMPLES as Real {
            return Err(SimError::InvalidArg {
                what: "time grid too large (t_sim / dt above 1e7 samples)",
            });
        }
        let samples = linspace(0.0, t_sim, n as usize);
        tracing::debug!(len = samples.len(), t_sim, dt, "built time grid");
        Ok(Self {
            samples,
            duration: t_sim,
            nominal_dt: dt,
        })
    }

    /// Wrap explicit samples. They must start at zero and increase strictly.
    pub fn from_samples(samples: Vec<Real>) -> SimResult<Self> {
        if samples.len() < 2 {
            return Err(SimError::InvalidArg {
                what: "time grid needs at least two samples",
            });
        }
        if samples[0] != 0.0 {
            return Err(SimError::InvalidArg {
                what: "time grid must start at zero",
            });
        }
        if !samples.windows(2).all(|w| w[1] > w[0]) {
            return Err(SimError::InvalidArg {
                what: "time grid must be strictly increasing",
            });
        }
        let duration = samples[samples.len() - 1];
        let nominal_dt = duration / (samples.len() - 1) as Real;
        Ok(Self {
            samples,
            duration,
            nominal_dt,
        })
    }

    pub fn samples(&self) -> &[Real] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Real> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Requested simulated duration (s).
    pub fn duration(&self) -> Real {
        self.duration
    }

    /// Requested step (s); see [`TimeGrid::step`] for the realised spacing.
    pub fn nominal_dt(&self) -> Real {
        self.nominal_dt
    }

    /// Spacing between sample `i - 1` and sample `i`.
    pub fn step(&self, i: usize) -> Real {
        self.samples[i] - self.samples[i - 1]
    }

    /// Evaluate `f` at every sample.
    pub fn map<F>(&self, f: F) -> Vec<Real>
    where
        F: Fn(Real) -> Real + Sync + Send,
    {
        if self.samples.len() >= PARALLEL_SAMPLE_THRESHOLD {
            sample_par(f, &self.samples)
        } else {
            sample(f, &self.samples)
        }
    }
}
