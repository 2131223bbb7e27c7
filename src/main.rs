use clap::Parser;
use jobportal::cli::{Cli, run};
use jobportal_observability::init_basic_console_logging;

fn main() {
    init_basic_console_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("❌ {e:#}");
            std::process::exit(1);
        }
    }
}
