// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

//! CLI for `gemai-deploy`.

use std::process::ExitCode;

use clap::Parser;

mod common_args;
mod constants;
mod deploy;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "gemai-deploy")]
#[command(author = "GemAI Labs")]
#[command(about = "Deploy the GemAI subscription service contract", long_about = None)]
#[command(version)]
struct Cli {
    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,

    #[command(flatten)]
    deploy: deploy::Args,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Build async runtime and block on the deployment
    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(deploy::exec(args.deploy)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
