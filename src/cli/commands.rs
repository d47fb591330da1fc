use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{CleaningPipeline, IntegrityChecker};
use crate::readers::TableReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::TableWriter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Clean {
            input_file,
            output_file,
            keep_intermediate,
        } => {
            println!("Cleaning delivery order data...");
            println!("Input file: {}", input_file.display());
            println!("Output file: {}", output_file.display());

            let progress = ProgressReporter::new_spinner("Cleaning data...", false);

            let table = TableReader::new().read_table(&input_file)?;
            info!("data read successfully");
            progress.set_message(&format!("Processing {} rows...", table.height()));

            let pipeline = if keep_intermediate {
                CleaningPipeline::with_columns_to_drop(Vec::new())
            } else {
                CleaningPipeline::new()
            };
            let cleaned = pipeline.run(table)?;

            TableWriter::new().write_table(&cleaned, &output_file)?;
            info!("data cleaned and saved");

            progress.finish_with_message(&format!(
                "Wrote {} rows, {} columns",
                cleaned.height(),
                cleaned.width()
            ));
            println!("Cleaning complete!");
        }

        Commands::Validate { input_file } => {
            println!("Validating delivery order data...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Validating data...", false);

            let table = TableReader::new().read_table(&input_file)?;
            info!("data read successfully");

            let derived = CleaningPipeline::new().derive(table)?;
            let checker = IntegrityChecker::new();
            let report = checker.check(&derived)?;

            progress.finish_with_message("Validation complete");
            println!("\n{}", checker.generate_summary(&report));

            if report.violations.is_empty() {
                println!("✅ All rows passed invariant checks");
            } else {
                println!("⚠️  Found {} invariant violations", report.violations.len());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
