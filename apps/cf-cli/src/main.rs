use cf_app::{
    AppResult, RunOutput, Scenario, ScenarioOverrides, default_scenario_yaml, load_scenario,
    read_scenario, run_analysis, to_csv, to_json,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "CruiseFlow CLI - first-order vehicle speed simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full simulation and print or export the result
    Run {
        #[command(flatten)]
        overrides: ScenarioArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print coefficients, stability and metrics only
    Metrics {
        #[command(flatten)]
        overrides: ScenarioArgs,
    },
    /// Print the default scenario as YAML
    Defaults,
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        path: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Csv,
    Json,
}

/// Scenario file plus per-field overrides.
#[derive(Args)]
struct ScenarioArgs {
    /// Scenario YAML or JSON file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Vehicle mass (kg)
    #[arg(long)]
    mass: Option<f64>,
    /// Drag coefficient (N·s/m)
    #[arg(long)]
    drag: Option<f64>,
    /// Force gain (N per throttle unit)
    #[arg(long)]
    force_gain: Option<f64>,
    /// Simulated duration (s)
    #[arg(long)]
    t_sim: Option<f64>,
    /// Initial velocity (m/s)
    #[arg(long)]
    v0: Option<f64>,
    /// Step input amplitude
    #[arg(long)]
    step: Option<f64>,
    /// Step switch-on time (s)
    #[arg(long)]
    step_time: Option<f64>,
}

impl ScenarioArgs {
    /// File (or defaults) with overrides applied. Validation happens once,
    /// in `run_analysis`.
    fn resolve(&self) -> AppResult<Scenario> {
        let base = match &self.config {
            Some(path) => read_scenario(path)?,
            None => Scenario::default(),
        };
        let overrides = ScenarioOverrides {
            mass_kg: self.mass,
            drag_n_s_per_m: self.drag,
            force_gain_n_per_unit: self.force_gain,
            t_sim_s: self.t_sim,
            v0_mps: self.v0,
            step_amplitude: self.step,
            step_time_s: self.step_time,
        };
        Ok(overrides.apply(base))
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            overrides,
            format,
            output,
        } => cmd_run(&overrides, format, output.as_deref()),
        Commands::Metrics { overrides } => cmd_metrics(&overrides),
        Commands::Defaults => cmd_defaults(),
        Commands::Validate { path } => cmd_validate(&path),
    }
}

fn cmd_run(
    overrides: &ScenarioArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> AppResult<()> {
    let scenario = overrides.resolve()?;
    let out = run_analysis(&scenario)?;

    let text = match format {
        OutputFormat::Summary => {
            let mut text = summary(&out);
            text.push_str(&disturbed_summary(&out));
            text
        }
        OutputFormat::Csv => to_csv(&out),
        OutputFormat::Json => to_json(&out)?,
    };

    if let Some(path) = output {
        std::fs::write(path, text)?;
        tracing::info!(path = %path.display(), samples = out.len(), "exported run");
        println!("✓ Exported {} samples to {}", out.len(), path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn cmd_metrics(overrides: &ScenarioArgs) -> AppResult<()> {
    let scenario = overrides.resolve()?;
    let out = run_analysis(&scenario)?;
    print!("{}", summary(&out));
    Ok(())
}

fn cmd_defaults() -> AppResult<()> {
    print!("{}", default_scenario_yaml()?);
    Ok(())
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", path.display());
    load_scenario(path)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn summary(out: &RunOutput) -> String {
    let v = &out.scenario.vehicle;
    let c = &out.coefficients;
    let m = &out.metrics;
    let w = &out.disturbance_window;
    format!(
        "Vehicle: m = {} kg, b = {} N·s/m, k_u = {} N/unit\n\
         System coefficients:\n\
         \x20 A = {:.6} 1/s\n\
         \x20 B = {:.6}\n\
         \x20 T = {:.4} s\n\
         Stability: {}\n\
         Metrics:\n\
         \x20 time constant   {:.4} s\n\
         \x20 steady state    {:.4} m/s\n\
         \x20 settling time   {:.4} s\n\
         Disturbance window: [{:.2}, {:.2}] s, grade {}\n",
        v.mass_kg,
        v.drag_n_s_per_m,
        v.force_gain_n_per_unit,
        c.decay_rate,
        c.input_gain,
        c.time_constant,
        out.stability,
        m.time_constant,
        m.steady_state_velocity,
        m.settling_time,
        w.start,
        w.end,
        w.grade,
    )
}

fn disturbed_summary(out: &RunOutput) -> String {
    let last = |series: &[f64]| series.last().copied().unwrap_or(f64::NAN);
    let min = out
        .disturbed_response
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    format!(
        "Traces ({} samples):\n\
         \x20 complete response final  {:.4} m/s\n\
         \x20 disturbed response final {:.4} m/s\n\
         \x20 disturbed response min   {:.4} m/s\n",
        out.len(),
        last(&out.complete_response),
        last(&out.disturbed_response),
        min,
    )
}
