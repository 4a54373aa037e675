//! TAQ Upload Binary
//!
//! Uploads TAQ quote ticks from a pipe-delimited file to Cloud Bigtable,
//! one `MutateRow` call per row, stopping at the first error or after
//! 1000 data rows.
//!
//! # Usage
//!
//! ```bash
//! taq-upload <project_id> <instance_id> <table_id> <file>
//! ```
//!
//! # Environment Variables
//!
//! - `BIGTABLE_EMULATOR_HOST`: Target a local emulator (`host:port`)
//!   instead of the production endpoint (plaintext, unauthenticated)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Credentials are discovered through Application Default Credentials;
//! none are accepted on the command line.
//!
//! Exit code 0 on success, 1 on wrong arguments, parse failure, or
//! request failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use taq_upload::{BigtableSink, UploadConfig, Uploader, telemetry};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "taq-upload", version, about = "Upload TAQ quote ticks to Cloud Bigtable")]
struct Cli {
    /// Google Cloud project id.
    project_id: String,
    /// Cloud Bigtable instance id.
    instance_id: String,
    /// Destination table id.
    table_id: String,
    /// Pipe-delimited TAQ quote file; the first line is a header.
    input: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // The contract is exit code 1 for a bad command line, not clap's 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                // --help and --version are not failures.
                ExitCode::SUCCESS
            };
        }
    };

    telemetry::init();

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    match run(cli).await {
        Ok(uploaded) => {
            println!("{uploaded} quotes successfully uploaded");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<usize> {
    let config = UploadConfig::new(cli.project_id, cli.instance_id, cli.table_id);
    tracing::info!(
        table = %config.table_name(),
        endpoint = %config.endpoint.url(),
        input = %cli.input.display(),
        "starting upload"
    );

    let sink = BigtableSink::connect(&config)
        .await
        .context("failed to establish Bigtable channel")?;

    let uploaded = Uploader::new(sink).run(&cli.input).await?;
    Ok(uploaded)
}
