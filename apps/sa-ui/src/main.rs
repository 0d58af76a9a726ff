#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::SaDashboardApp;
use clap::Parser;
use sa_app::DataSource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sa-ui")]
#[command(about = "SA Dashboard - Simulated Annealing result charts", long_about = None)]
struct Args {
    /// Directory containing sa_resultados.json and sa_vpl.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let source = DataSource::new(args.data_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("SA Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "SA Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(SaDashboardApp::new(cc, source)))),
    )
}
