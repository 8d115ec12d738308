use clap::Parser;
use maskrouter::cli::{execute, Cli};
use maskrouter::logging::{init_logging, LogConfig};
use maskrouter::RouterConfig;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_env())?;

    let config = RouterConfig::from_env();
    let mut stdout = std::io::stdout().lock();
    let found = execute(&cli, &config, &mut stdout)?;

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
