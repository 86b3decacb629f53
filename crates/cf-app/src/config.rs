//! Scenario configuration: vehicle parameters plus simulation settings.
//!
//! Every field is optional in a scenario file; missing values fall back to
//! the reference vehicle (1600 kg, 300 N·s/m, 50 N/unit) and a 25 s run.

use std::path::Path;

use cf_core::Real;
use cf_signals::StepInput;
use cf_sim::{DEFAULT_DT, MAX_GRID_SAMPLES, PhysicalParameters};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub mass_kg: Real,
    pub drag_n_s_per_m: Real,
    pub force_gain_n_per_unit: Real,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            mass_kg: 1600.0,
            drag_n_s_per_m: 300.0,
            force_gain_n_per_unit: 50.0,
        }
    }
}

impl From<VehicleConfig> for PhysicalParameters {
    fn from(v: VehicleConfig) -> Self {
        PhysicalParameters::new(v.mass_kg, v.drag_n_s_per_m, v.force_gain_n_per_unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Simulated duration (s)
    pub t_sim_s: Real,
    /// Nominal step (s)
    pub dt_s: Real,
    /// Initial velocity (m/s)
    pub v0_mps: Real,
    /// Step input amplitude (throttle units)
    pub step_amplitude: Real,
    /// Step switch-on time (s)
    pub step_time_s: Real,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            t_sim_s: 25.0,
            dt_s: DEFAULT_DT,
            v0_mps: 20.0,
            step_amplitude: 0.5,
            step_time_s: 5.0,
        }
    }
}

impl SimSettings {
    pub fn step_input(&self) -> StepInput {
        StepInput::new(self.step_time_s, self.step_amplitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub vehicle: VehicleConfig,
    pub simulation: SimSettings,
}

impl Scenario {
    pub fn physical_parameters(&self) -> PhysicalParameters {
        self.vehicle.into()
    }
}

/// Range an interactive front end would offer for a field. Values outside
/// it are legal but logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HintRange {
    pub field: &'static str,
    pub min: Real,
    pub max: Real,
}

impl HintRange {
    const fn new(field: &'static str, min: Real, max: Real) -> Self {
        Self { field, min, max }
    }
}

const HINT_RANGES: [HintRange; 7] = [
    HintRange::new("vehicle.mass_kg", 800.0, 3000.0),
    HintRange::new("vehicle.drag_n_s_per_m", 100.0, 500.0),
    HintRange::new("vehicle.force_gain_n_per_unit", 20.0, 100.0),
    HintRange::new("simulation.t_sim_s", 10.0, 50.0),
    HintRange::new("simulation.v0_mps", 0.0, 30.0),
    HintRange::new("simulation.step_amplitude", 0.0, 1.0),
    HintRange::new("simulation.step_time_s", 1.0, 20.0),
];

fn field_value(s: &Scenario, field: &str) -> Option<Real> {
    match field {
        "vehicle.mass_kg" => Some(s.vehicle.mass_kg),
        "vehicle.drag_n_s_per_m" => Some(s.vehicle.drag_n_s_per_m),
        "vehicle.force_gain_n_per_unit" => Some(s.vehicle.force_gain_n_per_unit),
        "simulation.t_sim_s" => Some(s.simulation.t_sim_s),
        "simulation.v0_mps" => Some(s.simulation.v0_mps),
        "simulation.step_amplitude" => Some(s.simulation.step_amplitude),
        "simulation.step_time_s" => Some(s.simulation.step_time_s),
        _ => None,
    }
}

/// Fields whose values fall outside the usual front-end ranges.
pub fn out_of_range_fields(scenario: &Scenario) -> Vec<(HintRange, Real)> {
    HINT_RANGES
        .iter()
        .filter_map(|hint| {
            let value = field_value(scenario, hint.field)?;
            (value < hint.min || value > hint.max).then_some((*hint, value))
        })
        .collect()
}

/// Check a scenario before any computation starts.
///
/// Non-positive mass or drag is an `InvalidParameter`; broken time settings
/// are `InvalidInput`. Unusual but valid values only produce warnings.
pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    scenario.physical_parameters().validate()?;

    let sim = &scenario.simulation;
    for (name, value) in [("t_sim_s", sim.t_sim_s), ("dt_s", sim.dt_s)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "simulation.{name} must be positive and finite (got {value})"
            )));
        }
    }
    let samples = (sim.t_sim_s / sim.dt_s).floor();
    if samples < 2.0 || samples > MAX_GRID_SAMPLES as Real {
        return Err(AppError::InvalidInput(format!(
            "simulation.t_sim_s / dt_s must be between 2 and {MAX_GRID_SAMPLES} (got {} / {})",
            sim.t_sim_s, sim.dt_s
        )));
    }
    for (name, value) in [
        ("v0_mps", sim.v0_mps),
        ("step_amplitude", sim.step_amplitude),
        ("step_time_s", sim.step_time_s),
    ] {
        if !value.is_finite() {
            return Err(AppError::InvalidInput(format!(
                "simulation.{name} must be finite (got {value})"
            )));
        }
    }

    for (hint, value) in out_of_range_fields(scenario) {
        tracing::warn!(
            field = hint.field,
            value,
            min = hint.min,
            max = hint.max,
            "scenario value outside the usual range"
        );
    }
    Ok(())
}

/// Parse a scenario from YAML text. JSON is valid YAML, so both work.
pub fn parse_scenario(text: &str) -> AppResult<Scenario> {
    if text.trim().is_empty() {
        return Ok(Scenario::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Read a scenario file (`.json` via serde_json, else YAML) without
/// validating it.
pub fn read_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let scenario = if is_json {
        serde_json::from_str(&content)?
    } else {
        parse_scenario(&content)?
    };
    tracing::debug!(path = %path.display(), "read scenario");
    Ok(scenario)
}

/// Read and validate a scenario file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let scenario = read_scenario(path)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

/// Per-field values that replace whatever a file or the defaults supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub mass_kg: Option<Real>,
    pub drag_n_s_per_m: Option<Real>,
    pub force_gain_n_per_unit: Option<Real>,
    pub t_sim_s: Option<Real>,
    pub v0_mps: Option<Real>,
    pub step_amplitude: Option<Real>,
    pub step_time_s: Option<Real>,
}

impl ScenarioOverrides {
    /// Apply the overrides. The result is not validated.
    pub fn apply(&self, mut scenario: Scenario) -> Scenario {
        let v = &mut scenario.vehicle;
        let s = &mut scenario.simulation;
        for (slot, value) in [
            (&mut v.mass_kg, self.mass_kg),
            (&mut v.drag_n_s_per_m, self.drag_n_s_per_m),
            (&mut v.force_gain_n_per_unit, self.force_gain_n_per_unit),
            (&mut s.t_sim_s, self.t_sim_s),
            (&mut s.v0_mps, self.v0_mps),
            (&mut s.step_amplitude, self.step_amplitude),
            (&mut s.step_time_s, self.step_time_s),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
        scenario
    }
}

/// The default scenario rendered as YAML.
pub fn default_scenario_yaml() -> AppResult<String> {
    Ok(serde_yaml::to_string(&Scenario::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_sim::SimError;

    #[test]
    fn defaults_match_reference_vehicle() {
        let s = Scenario::default();
        assert_eq!(s.vehicle.mass_kg, 1600.0);
        assert_eq!(s.vehicle.drag_n_s_per_m, 300.0);
        assert_eq!(s.vehicle.force_gain_n_per_unit, 50.0);
        assert_eq!(s.simulation.t_sim_s, 25.0);
        assert_eq!(s.simulation.dt_s, 0.01);
        assert_eq!(s.simulation.v0_mps, 20.0);
        assert_eq!(s.simulation.step_amplitude, 0.5);
        assert_eq!(s.simulation.step_time_s, 5.0);
        assert!(validate_scenario(&s).is_ok());
        assert!(out_of_range_fields(&s).is_empty());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let s = parse_scenario("vehicle:\n  mass_kg: 2000\nsimulation:\n  t_sim_s: 40\n").unwrap();
        assert_eq!(s.vehicle.mass_kg, 2000.0);
        assert_eq!(s.vehicle.drag_n_s_per_m, 300.0);
        assert_eq!(s.simulation.t_sim_s, 40.0);
        assert_eq!(s.simulation.dt_s, 0.01);
    }

    #[test]
    fn empty_text_is_default() {
        assert_eq!(parse_scenario("").unwrap(), Scenario::default());
        assert_eq!(parse_scenario("{}").unwrap(), Scenario::default());
    }

    #[test]
    fn default_yaml_round_trip() {
        let yaml = default_scenario_yaml().unwrap();
        assert!(yaml.contains("mass_kg"));
        assert_eq!(parse_scenario(&yaml).unwrap(), Scenario::default());
    }

    #[test]
    fn rejects_non_positive_mass() {
        let mut s = Scenario::default();
        s.vehicle.mass_kg = 0.0;
        let err = validate_scenario(&s).unwrap_err();
        assert!(matches!(
            err,
            AppError::Simulation(SimError::InvalidParameter { what: "mass", .. })
        ));
    }

    #[test]
    fn rejects_bad_time_settings() {
        let mut s = Scenario::default();
        s.simulation.dt_s = 0.0;
        assert!(matches!(validate_scenario(&s), Err(AppError::InvalidInput(_))));

        let mut s = Scenario::default();
        s.simulation.t_sim_s = 0.015;
        assert!(matches!(validate_scenario(&s), Err(AppError::InvalidInput(_))));

        let mut s = Scenario::default();
        s.simulation.dt_s = 1e-9;
        assert!(matches!(validate_scenario(&s), Err(AppError::InvalidInput(_))));

        let mut s = Scenario::default();
        s.simulation.v0_mps = Real::NAN;
        assert!(matches!(validate_scenario(&s), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_is_reported_not_rejected() {
        let mut s = Scenario::default();
        s.vehicle.mass_kg = 5000.0;
        s.simulation.v0_mps = 45.0;
        assert!(validate_scenario(&s).is_ok());
        let fields: Vec<&str> = out_of_range_fields(&s).iter().map(|(h, _)| h.field).collect();
        assert_eq!(fields, vec!["vehicle.mass_kg", "simulation.v0_mps"]);
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ScenarioOverrides {
            mass_kg: Some(2000.0),
            step_time_s: Some(2.0),
            ..Default::default()
        };
        let s = overrides.apply(Scenario::default());
        assert_eq!(s.vehicle.mass_kg, 2000.0);
        assert_eq!(s.simulation.step_time_s, 2.0);
        assert_eq!(s.vehicle.drag_n_s_per_m, 300.0);
        assert_eq!(s.simulation.v0_mps, 20.0);
        assert_eq!(ScenarioOverrides::default().apply(s), s);
    }

    #[test]
    fn overrides_can_repair_an_invalid_scenario() {
        let broken = parse_scenario("vehicle:\n  mass_kg: 0\n").unwrap();
        assert!(validate_scenario(&broken).is_err());
        let fixed = ScenarioOverrides {
            mass_kg: Some(1600.0),
            ..Default::default()
        }
        .apply(broken);
        assert!(validate_scenario(&fixed).is_ok());
    }
}
