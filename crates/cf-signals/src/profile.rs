//! Time profiles driving the vehicle model.

use std::fmt;
use std::str::FromStr;

use cf_core::{Real, deg_to_rad};
use serde::{Deserialize, Serialize};

use crate::error::SignalError;
use crate::pulse::GUST_PULSES;
use crate::step::StepInput;

/// A stateless scalar signal `u = f(t)`.
pub type SignalFn = fn(Real) -> Real;

/// Throttle breakpoints `(time_s, increment)`, applied cumulatively.
const THROTTLE_STEPS: [(Real, Real); 3] = [(2.0, 100.0), (15.0, 60.0), (28.0, -40.0)];

/// Throttle/torque profile.
///
/// Each breakpoint contributes its increment once `t` reaches it; the checks
/// are independent, so values are 0, 100, 160 and finally 120.
pub fn throttle(t: Real) -> Real {
    let mut val = 0.0;
    for &(at, delta) in &THROTTLE_STEPS {
        if t >= at {
            val += delta;
        }
    }
    val
}

/// Road slope in radians.
///
/// Uphill 2° on `[10, 22)`, downhill -1.5° on `[28, 34)`, flat elsewhere.
pub fn slope(t: Real) -> Real {
    if (10.0..22.0).contains(&t) {
        return deg_to_rad(2.0);
    }
    if (28.0..34.0).contains(&t) {
        return deg_to_rad(-1.5);
    }
    0.0
}

/// External wind-gust force in newtons.
pub fn gust_disturbance(t: Real) -> Real {
    GUST_PULSES[0].eval(t) + GUST_PULSES[1].eval(t)
}

fn zero(_t: Real) -> Real {
    0.0
}

/// Named selection of a built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Throttle,
    Slope,
    GustDisturbance,
    Zero,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Throttle,
        Profile::Slope,
        Profile::GustDisturbance,
        Profile::Zero,
    ];

    /// The underlying generator.
    pub fn as_fn(self) -> SignalFn {
        match self {
            Profile::Throttle => throttle,
            Profile::Slope => slope,
            Profile::GustDisturbance => gust_disturbance,
            Profile::Zero => zero,
        }
    }

    pub fn eval(self, t: Real) -> Real {
        (self.as_fn())(t)
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Throttle => "throttle",
            Profile::Slope => "slope",
            Profile::GustDisturbance => "gust_disturbance",
            Profile::Zero => "zero",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SignalError::UnknownProfile {
                name: s.to_string(),
            })
    }
}

/// Input driving a model: either a built-in profile or a plain step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputSignal {
    Profile { profile: Profile },
    Step(StepInput),
}

impl InputSignal {
    pub fn eval(&self, t: Real) -> Real {
        match self {
            InputSignal::Profile { profile } => profile.eval(t),
            InputSignal::Step(step) => step.eval(t),
        }
    }
}

impl Default for InputSignal {
    fn default() -> Self {
        InputSignal::Profile {
            profile: Profile::Throttle,
        }
    }
}

impl From<Profile> for InputSignal {
    fn from(profile: Profile) -> Self {
        InputSignal::Profile { profile }
    }
}

impl From<StepInput> for InputSignal {
    fn from(step: StepInput) -> Self {
        InputSignal::Step(step)
    }
}
