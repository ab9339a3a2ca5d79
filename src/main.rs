use std::process::ExitCode;

use clap::Parser;
use irviz::app::run_viewer;
use irviz::batch::{run_batch, BatchReport};
use irviz::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();

    let plot = cli.plot_config();
    let report = match run_batch(&cli.files, &cli.batch_options()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::from(2);
        }
    };

    print_summary(&report);
    let exit = if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };

    if !cli.no_plot && !report.processed.is_empty() {
        let (x0, x1) = plot.x_limits;
        log::info!("Plotting all spectra with x limit {x0} to {x1}");
        match plot.y_limits {
            Some((y0, y1)) => log::info!("Plotting all spectra with y limit {y0} to {y1}"),
            None => log::info!("Plotting all spectra with automatic y limits"),
        }
        log::info!("Close the plot window to exit.");
        if let Err(e) = run_viewer(report.processed, plot) {
            log::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    }

    exit
}

fn print_summary(report: &BatchReport) {
    println!(
        "All spectra processed: {} saved, {} skipped, {} failed.",
        report.processed.len(),
        report.skipped.len(),
        report.failed.len()
    );
    for (path, reason) in &report.skipped {
        println!("  skipped {}: {reason}", path.display());
    }
    for err in &report.failed {
        println!("  failed  {err}");
    }
}
