//! Series export for plotting tools.

use std::fmt::Write;

use crate::error::AppResult;
use crate::run::RunOutput;

pub const CSV_HEADER: &str =
    "time_s,throttle,slope_rad,gust_n,grade,v_complete_mps,v_disturbed_mps";

/// One CSV row per time sample.
pub fn to_csv(out: &RunOutput) -> String {
    let mut csv = String::with_capacity(64 * (out.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for i in 0..out.len() {
        // writing into a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            out.time[i],
            out.throttle[i],
            out.slope[i],
            out.gust_disturbance[i],
            out.grade_disturbance[i],
            out.complete_response[i],
            out.disturbed_response[i],
        );
    }
    csv
}

/// Whole run, pretty-printed.
///
/// JSON has no encoding for NaN or infinity, so samples of a diverged trace
/// are written as `null`. Such output is for inspection only and does not
/// deserialize back into a [`RunOutput`].
pub fn to_json(out: &RunOutput) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scenario;
    use crate::run::run_analysis;

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let out = run_analysis(&Scenario::default()).unwrap();
        let csv = to_csv(&out);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), out.len());
        // gust tail at t = 0 is tiny but non-zero
        assert!(rows[0].starts_with("0,0,0,"));
        assert!(rows[0].ends_with(",0,20,20"));
        assert!(rows.iter().all(|r| r.split(',').count() == 7));
    }

    #[test]
    fn json_round_trip() {
        let out = run_analysis(&Scenario::default()).unwrap();
        let json = to_json(&out).unwrap();
        let back: RunOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), out.len());
        assert_eq!(back.stability, out.stability);
        assert!((back.metrics.time_constant - out.metrics.time_constant).abs() < 1e-12);
        assert!((back.disturbance_window.end - out.disturbance_window.end).abs() < 1e-12);
    }

    #[test]
    fn diverged_trace_exports_nulls() {
        let mut s = Scenario::default();
        s.vehicle.mass_kg = 1.0;
        s.vehicle.drag_n_s_per_m = 5000.0;
        s.simulation.t_sim_s = 50.0;
        s.simulation.dt_s = 0.5;
        let out = run_analysis(&s).unwrap();
        assert!(!out.disturbed_response.last().unwrap().is_finite());

        let json = to_json(&out).unwrap();
        assert!(json.contains("null"));
        assert!(serde_json::from_str::<RunOutput>(&json).is_err());
    }
}
