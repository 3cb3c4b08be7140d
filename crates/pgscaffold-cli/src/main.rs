use clap::Parser;
use console::style;
use pgscaffold_cli::Cli;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    pgscaffold_cli::init_tracing(cli.verbose());

    let command_line = std::env::args().collect::<Vec<_>>().join(" ");
    let config = cli.config(command_line);

    match pgscaffold_cli::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("ERROR").red().bold());
            ExitCode::FAILURE
        }
    }
}
