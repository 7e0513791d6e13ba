use clap::{Parser, Subcommand, ValueEnum};
use pf_project::{ProjectResult, compile, load};
use pf_solver::{FittingPolicy, FlowState, SolveMode, SolverConfig, solve, solve_with_progress};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PipeFlow CLI - single pipe liquid flow solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate problem file syntax and values
    Validate {
        /// Path to the problem file (.yaml, .yml or .json)
        problem_path: PathBuf,
    },
    /// Solve a problem file
    Solve {
        /// Path to the problem file (.yaml, .yml or .json)
        problem_path: PathBuf,
        /// Override the solve mode from the file
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Override the iteration cap from the file
        #[arg(long)]
        max_iterations: Option<usize>,
        /// Ignore out-of-range fittings instead of failing
        #[arg(long)]
        permissive: bool,
        /// Print every fixed-point iteration
        #[arg(long)]
        show_iterations: bool,
    },
    /// Solve in both modes and report the difference
    Compare {
        /// Path to the problem file (.yaml, .yml or .json)
        problem_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Direct,
    Iterative,
}

impl From<ModeArg> for SolveMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Direct => SolveMode::Direct,
            ModeArg::Iterative => SolveMode::Iterative,
        }
    }
}

fn main() -> ProjectResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { problem_path } => cmd_validate(&problem_path),
        Commands::Solve {
            problem_path,
            mode,
            max_iterations,
            permissive,
            show_iterations,
        } => cmd_solve(
            &problem_path,
            mode.map(SolveMode::from),
            max_iterations,
            permissive,
            show_iterations,
        ),
        Commands::Compare { problem_path } => cmd_compare(&problem_path),
    }
}

fn cmd_validate(problem_path: &Path) -> ProjectResult<()> {
    println!("Validating problem: {}", problem_path.display());
    let file = load(problem_path)?;
    compile(&file)?;
    println!("✓ Problem '{}' is valid", file.name);
    Ok(())
}

fn cmd_solve(
    problem_path: &Path,
    mode: Option<SolveMode>,
    max_iterations: Option<usize>,
    permissive: bool,
    show_iterations: bool,
) -> ProjectResult<()> {
    let file = load(problem_path)?;
    let (problem, mut config) = compile(&file)?;
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if let Some(max_iterations) = max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    if permissive {
        config = config.with_fitting_policy(FittingPolicy::Permissive);
    }

    println!("Solving '{}' ({:?})", file.name, config.mode);
    let state = if show_iterations {
        solve_with_progress(&problem, &config, &mut |event| {
            println!(
                "  iter {:>3}: V = {:.6} m/s -> {:.6} m/s  Re = {:.0}  f = {:.5}  |dV| = {:.3e}",
                event.iteration,
                event.velocity,
                event.next_velocity,
                event.reynolds,
                event.friction_factor,
                event.change()
            );
        })?
    } else {
        solve(&problem, &config)?
    };

    print_state(&state);
    Ok(())
}

fn cmd_compare(problem_path: &Path) -> ProjectResult<()> {
    let file = load(problem_path)?;
    let (problem, config) = compile(&file)?;

    let direct = solve(
        &problem,
        &SolverConfig {
            mode: SolveMode::Direct,
            ..config
        },
    )?;
    let iterative = solve(
        &problem,
        &SolverConfig {
            mode: SolveMode::Iterative,
            ..config
        },
    )?;

    println!("Comparing modes for '{}'", file.name);
    println!("  Direct:    {:>12.3} L/min", direct.flow_rate_lpm());
    println!("  Iterative: {:>12.3} L/min", iterative.flow_rate_lpm());

    let reference = iterative.flow_rate_lpm();
    if reference != 0.0 {
        let diff = (direct.flow_rate_lpm() - reference).abs() / reference.abs() * 100.0;
        println!("  Difference: {diff:.2}%");
    }
    Ok(())
}

fn print_state(state: &FlowState) {
    let status = if state.converged { "✓" } else { "⚠" };
    println!(
        "{status} Flow rate: {:.6} m³/s ({:.3} L/min)",
        state.flow_rate.value,
        state.flow_rate_lpm()
    );
    println!("  Velocity: {:.4} m/s", state.velocity.value);
    println!("  Reynolds: {:.0} ({:?})", state.reynolds, state.regime);
    println!("  Friction factor: {:.5}", state.friction_factor);
    println!(
        "  K: friction {:.4}, valve {:.4}, orifice {:.4}, total {:.4}",
        state.losses.friction, state.losses.valve, state.losses.orifice, state.losses.total
    );
    println!("  Resistance: {:.4e} Pa·s²/m⁶", state.resistance);
    match state.mode {
        SolveMode::Direct => println!("  Mode: direct (approximate)"),
        SolveMode::Iterative => println!(
            "  Mode: iterative, {} iterations, converged: {} (last |dV| = {:.3e})",
            state.iterations, state.converged, state.last_change
        ),
    }
}
