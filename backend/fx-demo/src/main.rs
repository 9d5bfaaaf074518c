use fx_demo::{Cli, ScenarioOptions, logger};

use std::process::ExitCode;

use clap::Parser;
use log::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> fx_demo::Result<String> {
    // Load and validate configuration
    let config = fx_config::Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let options = ScenarioOptions {
        subscribers: usize::from(cli.subscribers),
        limit: cli
            .limit
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX)),
        headers: cli.headers,
        payloads: cli.payloads,
    };

    let summary = fx_demo::run(config.channel, &options)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };

    Ok(output)
}
