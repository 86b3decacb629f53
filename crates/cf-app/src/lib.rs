//! Shared application service layer for cruiseflow.
//!
//! Front ends hand a [`Scenario`] to [`run_analysis`] and get back a
//! self-contained [`RunOutput`] holding the time grid, all input signals,
//! both velocity traces and the derived metrics. Scenarios can be loaded
//! from YAML or JSON files; results can be exported as CSV or JSON.

pub mod config;
pub mod error;
pub mod export;
pub mod run;

// Re-export key types for convenience
pub use config::{
    HintRange, Scenario, ScenarioOverrides, SimSettings, VehicleConfig, default_scenario_yaml,
    load_scenario, out_of_range_fields, parse_scenario, read_scenario, validate_scenario,
};
pub use error::{AppError, AppResult};
pub use export::{CSV_HEADER, to_csv, to_json};
pub use run::{RunOutput, run_analysis};
