use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "delivery-processor")]
#[command(about = "Food delivery order dataset cleaner and feature builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean raw order data and write the feature-enriched CSV
    Clean {
        #[arg(short, long, help = "Raw delivery order CSV file")]
        input_file: PathBuf,

        #[arg(short, long, help = "Cleaned output CSV path")]
        output_file: PathBuf,

        #[arg(
            long,
            default_value = "false",
            help = "Keep raw and intermediate feature columns in the output"
        )]
        keep_intermediate: bool,
    },

    /// Run the cleaning pipeline and report invariant violations without
    /// writing any output
    Validate {
        #[arg(short, long, help = "Raw delivery order CSV file")]
        input_file: PathBuf,
    },
}
