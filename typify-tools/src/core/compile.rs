// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compilation of contract sources into ABI artifacts.
//!
//! The generator only relies on the [`Compiler`] contract: once `compile` returns, the output
//! directory holds one JSON artifact with an `"abi"` array per contract.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use serde_json::json;

use crate::utils::{
    create_dir_if_dne,
    solc::{self, SolcError},
};

/// Extension of Solidity source files.
pub const SOURCE_EXTENSION: &str = "sol";

/// Turns a directory of contract sources into a directory of artifacts.
pub trait Compiler {
    fn compile(&self, source_dir: &Path, output_dir: &Path) -> Result<(), CompileError>;
}

/// Errors which can occur while compiling contracts. All of them are fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("{0}")]
    Solc(#[from] SolcError),

    #[error("{} failed (exit code: {:?})\n{}", .0.process_name, .0.exit_code, .0.stderr.trim_end())]
    CommandFailure(ProcessOutput),
    #[error("artifact directory {0} does not exist")]
    MissingArtifacts(PathBuf),
}

/// Captured output of a finished child process.
#[derive(Debug)]
pub struct ProcessOutput {
    pub process_name: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Returns stdout of a successful process, or the whole output as an error.
    pub fn check(process_name: impl Into<String>, output: Output) -> Result<String, CompileError> {
        let process_output = ProcessOutput {
            process_name: process_name.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };
        if output.status.success() {
            Ok(process_output.stdout)
        } else {
            Err(CompileError::CommandFailure(process_output))
        }
    }
}

/// Compiles every `.sol` file below the source directory with `solc`.
#[derive(Clone, Debug)]
pub struct Solc {
    program: PathBuf,
}

impl Default for Solc {
    fn default() -> Self {
        Self::new("solc")
    }
}

impl Solc {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Source files to compile, sorted, skipping anything inside the output directory.
    pub fn sources(source_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
        let pattern = format!(
            "{}/**/*.{SOURCE_EXTENSION}",
            glob::Pattern::escape(&source_dir.to_string_lossy())
        );
        let mut sources = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(glob::GlobError::into_error)?;
            if path.starts_with(output_dir) || !path.is_file() {
                continue;
            }
            sources.push(path);
        }
        sources.sort();
        Ok(sources)
    }
}

impl Compiler for Solc {
    fn compile(&self, source_dir: &Path, output_dir: &Path) -> Result<(), CompileError> {
        solc::check_exists(&self.program)?;

        let sources = Self::sources(source_dir, output_dir)?;
        if sources.is_empty() {
            warn!(@yellow, "no .{SOURCE_EXTENSION} files found in {}", source_dir.display());
            return Ok(());
        }
        debug!(@grey, "compiling {} source file(s) with {}", sources.len(), self.program.display());

        let output = Command::new(&self.program)
            .stdin(Stdio::null())
            .arg("--combined-json")
            .arg("abi,bin")
            .arg("--base-path")
            .arg(source_dir)
            .args(&sources)
            .output()?;
        let stdout = ProcessOutput::check("solc", output)?;

        create_dir_if_dne(output_dir)?;
        let mut written: Vec<String> = Vec::new();
        for contract in solc::parse_combined_json(&stdout)? {
            if written.contains(&contract.name) {
                warn!(@yellow, "contract {} is defined more than once, keeping {}", contract.name, contract.source);
            }
            let artifact = json!({
                "contractName": contract.name,
                "sourceName": contract.source,
                "abi": contract.abi,
                "bytecode": contract.bytecode,
            });
            let path = output_dir.join(format!("{}.json", contract.name));
            fs::write(&path, serde_json::to_string_pretty(&artifact)?)?;
            debug!(@grey, "wrote {}", path.display());
            written.push(contract.name);
        }
        Ok(())
    }
}

/// Uses artifacts that already exist instead of compiling.
#[derive(Clone, Copy, Debug, Default)]
pub struct Precompiled;

impl Compiler for Precompiled {
    fn compile(&self, _source_dir: &Path, output_dir: &Path) -> Result<(), CompileError> {
        if output_dir.is_dir() {
            Ok(())
        } else {
            Err(CompileError::MissingArtifacts(output_dir.to_path_buf()))
        }
    }
}
