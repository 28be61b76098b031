//! Interactive comparison of RK4 against analytical solutions.
//!
//! Each mode integrates a second-order ODE with RK4 and opens a plot window
//! with the numerical solution (blue) over the analytical one (red).
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- growth
//! cargo run --example plot --features plot -- growth 0.1
//! cargo run --example plot --features plot -- forced
//! cargo run --example plot --features plot -- forced 0.5 classic
//! ```
//!
//! Set `RUST_LOG=debug` to see the integrator's log output.
//!
//! # Modes
//!
//! - **growth [h]** — `y'' - 4y = 0` on \[0, 3\] with y(0) = 1, y'(0) = 2.
//!   The analytical solution is e^(2x). Default h = 0.5.
//!
//! - **forced [h]** — `y'' + 4y = cos(3x)` on \[0, 7\] with y(0) = 1,
//!   y'(0) = 2. Default h = 0.2.
//!
//! Append `classic` to use the textbook fourth stage instead of the default.

use std::error::Error;

use kutta_observers::{Color32, PlotObserver, ShowConfig, TraceStyle};
use kutta_problems::{
    ExponentialGrowth, ForcedOscillator, Problem, ScenarioConfig, reference, scenario,
};
use kutta_solvers::ode::rk4;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "growth".into());
    let step = args
        .next()
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size: expected a number, e.g. 0.1");
            std::process::exit(1);
        });
    let rk4_config = match args.next().as_deref() {
        None => rk4::Config::default(),
        Some("classic") => rk4::Config::classic(),
        Some(other) => {
            eprintln!("Unknown option: {other}");
            std::process::exit(1);
        }
    };

    match mode.as_str() {
        "growth" => plot(&ExponentialGrowth, ScenarioConfig::growth(), step, &rk4_config),
        "forced" => plot(&ForcedOscillator, ScenarioConfig::forced(), step, &rk4_config),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [growth|forced] [h] [classic]");
            std::process::exit(1);
        }
    }
}

/// Integrates `problem` and shows it against its analytical solution.
fn plot<P: Problem>(
    problem: &P,
    config: ScenarioConfig,
    step: Option<f64>,
    rk4_config: &rk4::Config,
) -> Result<(), Box<dyn Error>> {
    let config = match step {
        Some(h) => config.with_numeric_step(h),
        None => config,
    };
    let initial = config.initial();

    let mut obs = PlotObserver::<2>::new(["Numerical Solution", "Analytical Solution"]);

    // Trace 1 holds the analytical curve; the solver fills trace 0.
    for [x, y] in reference::sample_problem(problem, &initial, config.xn, config.h_reference)? {
        obs.record(x, [None, Some(y)]);
    }

    let solution = rk4::solve(
        problem,
        initial,
        config.xn,
        config.h_numeric,
        rk4_config,
        &mut obs,
    )?;

    info!(
        equation = problem.equation(),
        h = config.h_numeric,
        points = solution.trajectory.len(),
        max_error = problem.max_error(&solution.trajectory),
        "integration finished"
    );

    obs.show(
        ShowConfig::new()
            .title(scenario::title(problem, config.h_numeric))
            .legend()
            .axis_labels("x", "y")
            .style(0, TraceStyle::solid(Color32::BLUE))
            .style(1, TraceStyle::solid(Color32::RED)),
    )?;

    Ok(())
}
