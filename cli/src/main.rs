use clap::Parser;
use presentation::cli::{Cli, CliApp};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    shared::telemetry::init_tracing();
    let cli = Cli::parse();
    let mut app = CliApp::new();
    let code = app.run(cli).await?;
    Ok(code)
}
