use clap::{Parser, Subcommand};
use sa_app::{AppError, AppResult, Dashboard, DataSource, build_horizon_charts, load_study};
use sa_charts::{ChartSpec, convergence_chart, horizon_chart};
use sa_results::{IterationCount, SolutionType, format_thousands};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sa-cli")]
#[command(about = "SA Dashboard CLI - inspect Simulated Annealing result files", long_about = None)]
struct Cli {
    /// Directory containing sa_resultados.json and sa_vpl.json
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load both files and build every chart
    Check,
    /// Print yearly VPL for one iteration count
    Horizon {
        /// Iteration count (5000, 10000, 25000 or 50000)
        #[arg(short, long, default_value_t = IterationCount::default())]
        iterations: IterationCount,
        /// Solution type: mean or best
        #[arg(short, long, default_value_t = SolutionType::Mean)]
        solution: SolutionType,
    },
    /// Print total VPL per iteration count
    Convergence {
        /// Solution type: mean or best
        #[arg(short, long, default_value_t = SolutionType::Mean)]
        solution: SolutionType,
    },
    /// Export the four page charts as JSON
    Export {
        /// Iteration count used for the horizon charts
        #[arg(short, long, default_value_t = IterationCount::default())]
        iterations: IterationCount,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = DataSource::new(cli.data_dir);
    tracing::debug!(dir = %source.dir().display(), "resolved data directory");

    let result = match cli.command {
        Commands::Check => cmd_check(&source),
        Commands::Horizon {
            iterations,
            solution,
        } => cmd_horizon(&source, iterations, solution),
        Commands::Convergence { solution } => cmd_convergence(&source, solution),
        Commands::Export { iterations, output } => {
            cmd_export(&source, iterations, output.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(source: &DataSource) -> AppResult<()> {
    println!("Checking result files in: {}", source.dir().display());
    let study = load_study(source)?;

    for iterations in IterationCount::FIXED {
        let charts = build_horizon_charts(&study.horizon, iterations)?;
        println!("✓ {} ({} charts)", iterations.option_label(), charts.len());
    }
    for solution in SolutionType::ALL {
        let chart = convergence_chart(&study.vpl, solution)?;
        println!("✓ {}", chart.title);
    }
    println!("✓ All charts built");
    Ok(())
}

fn cmd_horizon(
    source: &DataSource,
    iterations: IterationCount,
    solution: SolutionType,
) -> AppResult<()> {
    let study = load_study(source)?;
    let chart = horizon_chart(&study.horizon, iterations, solution)?;
    print_chart(&chart, "Ano");
    Ok(())
}

fn cmd_convergence(source: &DataSource, solution: SolutionType) -> AppResult<()> {
    let study = load_study(source)?;
    let chart = convergence_chart(&study.vpl, solution)?;
    print_chart(&chart, "Iterações");
    Ok(())
}

fn cmd_export(
    source: &DataSource,
    iterations: IterationCount,
    output: Option<&Path>,
) -> AppResult<()> {
    let dashboard = Dashboard::load_with_selection(source, iterations)?;
    let document = serde_json::json!({
        "iterations": dashboard.selected(),
        "horizon": dashboard.horizon_charts(),
        "convergence": dashboard.convergence_charts(),
    });
    let text = serde_json::to_string_pretty(&document)
        .map_err(|e| AppError::Processing(e.to_string()))?;

    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| {
                AppError::Processing(format!("failed to write {}: {}", path.display(), e))
            })?;
            println!("✓ Exported charts to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn print_chart(chart: &ChartSpec, x_header: &str) {
    println!("{}", chart.title);

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    print!("{:>10}", x_header);
    for name in &names {
        print!(" {:>14}", name);
    }
    println!();

    let rows = chart.series.iter().map(|s| s.len()).max().unwrap_or(0);
    for row in 0..rows {
        let x_label = chart
            .series
            .first()
            .and_then(|s| s.positions().get(row).copied())
            .map(|x| chart.x_axis.format_tick(x))
            .unwrap_or_default();
        print!("{:>10}", x_label);
        for series in &chart.series {
            let cell = series
                .y
                .get(row)
                .map(|v| format_thousands(*v))
                .unwrap_or_default();
            print!(" {:>14}", cell);
        }
        println!();
    }
}
