use clap::Parser;
use delivery_processor::cli::{run, Cli};
use delivery_processor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
