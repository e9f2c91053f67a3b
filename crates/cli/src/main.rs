use std::process::ExitCode;

use clap::Parser;

use rentora_cli::command::{Cli, run};

fn main() -> ExitCode {
    rentora_observability::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
