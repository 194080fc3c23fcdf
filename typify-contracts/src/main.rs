// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `typify-contracts`.

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgGroup, Parser};

mod error;
mod generate;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "typify-contracts")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Generate typed ethers bindings for Solidity contracts", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["src", "src_flag"])))]
struct Args {
    /// Directory containing the contract sources
    #[arg(value_name = "SRC")]
    src: Option<PathBuf>,
    /// Directory containing the contract sources (same as <SRC>)
    #[arg(long = "src", value_name = "SRC")]
    src_flag: Option<PathBuf>,

    /// Where artifacts and bindings are written [default: <SRC>/artifacts]
    #[arg(long)]
    artifacts: Option<PathBuf>,
    /// Generate bindings from existing artifacts without running solc
    #[arg(long)]
    skip_compile: bool,
    /// Path of the solc binary
    #[arg(long)]
    solc: Option<PathBuf>,
    /// Module the runtime types are imported from [default: ethers]
    #[arg(long)]
    runtime_module: Option<String>,
    /// Name of the runner parameter of generated factories [default: runner]
    #[arg(long)]
    runner_param: Option<String>,

    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn source_dir(&self) -> PathBuf {
        self.src
            .clone()
            .or_else(|| self.src_flag.clone())
            .unwrap_or_default()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Report any error and return proper exit code
    match generate::exec(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
