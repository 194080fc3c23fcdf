// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Helpers for driving `solc` and reading its `--combined-json` output.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{color::Color, sys};

const LINK: &str = "https://docs.soliditylang.org/en/latest/installing-solidity.html";

pub fn check_exists(program: &Path) -> Result<(), SolcError> {
    if sys::command_exists(program) {
        Ok(())
    } else {
        Err(SolcError::CommandDoesNotExist(program.display().to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SolcError {
    #[error("{0} not found. Please see\n{link}", link = LINK.red())]
    CommandDoesNotExist(String),
    #[error("unexpected solc output: {0}")]
    Output(#[from] serde_json::Error),
}

/// A single contract out of a `solc --combined-json abi,bin` run.
#[derive(Debug, PartialEq)]
pub struct CompiledContract {
    pub name: String,
    pub source: String,
    pub abi: Vec<Value>,
    pub bytecode: String,
}

#[derive(Deserialize)]
struct CombinedJson {
    #[serde(default)]
    contracts: Map<String, Value>,
}

#[derive(Deserialize)]
struct CombinedContract {
    abi: Value,
    #[serde(default)]
    bin: String,
}

/// Parses the stdout of `solc --combined-json abi,bin`.
///
/// Contracts are keyed `<source>:<name>`. Older compilers emit each ABI as a JSON string rather
/// than an array, so both shapes are accepted.
pub fn parse_combined_json(stdout: &str) -> Result<Vec<CompiledContract>, SolcError> {
    let combined: CombinedJson = serde_json::from_str(stdout)?;
    let mut contracts = Vec::with_capacity(combined.contracts.len());
    for (key, value) in combined.contracts {
        let (source, name) = key.rsplit_once(':').unwrap_or(("", key.as_str()));
        let contract: CombinedContract = serde_json::from_value(value)?;
        let abi = match contract.abi {
            Value::String(text) => serde_json::from_str(&text)?,
            other => serde_json::from_value(other)?,
        };
        contracts.push(CompiledContract {
            name: name.to_string(),
            source: source.to_string(),
            abi,
            bytecode: format!("0x{}", contract.bin),
        });
    }
    Ok(contracts)
}
