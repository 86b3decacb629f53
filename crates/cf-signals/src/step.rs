//! Parameterised step signals: the classic step input and the grade
//! disturbance window that loads the disturbed integrator.

use cf_core::{Real, ensure_finite};
use serde::{Deserialize, Serialize};

use crate::error::{SignalError, SignalResult};

/// Step of `amplitude` switched on at `time` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    pub time: Real,
    pub amplitude: Real,
}

impl StepInput {
    pub fn new(time: Real, amplitude: Real) -> Self {
        Self { time, amplitude }
    }

    pub fn eval(&self, t: Real) -> Real {
        if self.is_active(t) { self.amplitude } else { 0.0 }
    }

    /// Activation mask used to gate the forced response.
    pub fn is_active(&self, t: Real) -> bool {
        t >= self.time
    }
}

/// Constant grade fraction applied over the closed interval `[start, end]`.
///
/// The fraction is added to the drag as `grade * m * g`, so `0.1` behaves like
/// a 10% grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisturbanceWindow {
    /// Window start (s).
    pub start: Real,
    /// Window end (s), inclusive.
    pub end: Real,
    /// Grade fraction inside the window.
    pub grade: Real,
}

impl DisturbanceWindow {
    /// Fraction of the simulated duration where the window opens.
    pub const START_FRACTION: Real = 0.3;
    /// Fraction of the simulated duration where the window closes.
    pub const END_FRACTION: Real = 0.7;
    /// Grade applied inside the window.
    pub const DEFAULT_GRADE: Real = 0.1;

    pub fn new(start: Real, end: Real, grade: Real) -> SignalResult<Self> {
        let start = ensure_finite(start, "disturbance window start")?;
        let end = ensure_finite(end, "disturbance window end")?;
        let grade = ensure_finite(grade, "disturbance grade")?;
        if end < start {
            return Err(SignalError::InvalidArg {
                what: "disturbance window end must not precede start",
            });
        }
        Ok(Self { start, end, grade })
    }

    /// The middle 30%-70% of a run of length `t_sim`, at a 10% grade.
    pub fn for_duration(t_sim: Real) -> Self {
        Self {
            start: t_sim * Self::START_FRACTION,
            end: t_sim * Self::END_FRACTION,
            grade: Self::DEFAULT_GRADE,
        }
    }

    /// A window that never loads the model.
    pub fn none() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            grade: 0.0,
        }
    }

    pub fn contains(&self, t: Real) -> bool {
        t >= self.start && t <= self.end
    }

    pub fn eval(&self, t: Real) -> Real {
        if self.contains(t) { self.grade } else { 0.0 }
    }
}
