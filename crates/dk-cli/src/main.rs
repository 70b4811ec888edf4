// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use dk_cli::{Cli, Commands, Parser};
use dk_client_api::KeyClientError;
use std::process::ExitCode;

/// Exit status when the repository does not exist
const EXIT_NOT_FOUND: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = cli.logging.clone().init("dk-cli") {
        eprintln!("warning: logging disabled: {:#}", err);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let not_found = err
                .downcast_ref::<KeyClientError>()
                .is_some_and(KeyClientError::is_not_found);
            if not_found {
                ExitCode::from(EXIT_NOT_FOUND)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = dk_rest_client::new_repository_client(cli.client_config()?)?;

    match &cli.command {
        Commands::Create(args) => {
            let created = args.run(client.as_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
    }

    Ok(())
}
