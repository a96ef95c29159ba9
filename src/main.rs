//! Vitrine CLI

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    vitrine::config::load_dotenv();

    let cli = cli::Cli::parse();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);

            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "CLI error output to user")]
fn report(error: &cli::CliError) {
    eprintln!("{error}");
}
