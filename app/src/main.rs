//! FILENAME: app/src/main.rs

use std::process::ExitCode;

use app_lib::{log_error, run, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            for note in &output.stderr {
                eprintln!("{}", note);
            }
            println!("{}", output.stdout.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error!("SYS", "{}", e);
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
