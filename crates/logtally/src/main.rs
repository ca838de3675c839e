use clap::Parser;
use logtally::cli::Cli;
use logtally::runtime::{boot, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = boot::init_logging(cli.log.as_deref());
    run::run(&cli)
}
