//! CLI entry point for the skybox generator

use clap::Parser;
use skyboxgen::io::cli::{Cli, SkyboxProcessor};

fn main() -> skyboxgen::Result<()> {
    let cli = Cli::parse();
    let processor = SkyboxProcessor::new(cli);
    processor.process()
}
