// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;
use typify_tools::{
    core::{
        compile::{Compiler, Precompiled, Solc},
        manifest,
    },
    ops::{self, GenerateConfig},
};

use crate::{error::CliResult, Args};

/// Resolves the configuration (flags over `Typify.toml` over defaults) and runs the generator.
pub fn exec(args: &Args) -> CliResult {
    let source_dir = args.source_dir();
    if !source_dir.is_dir() {
        return Err(eyre!("source directory {} does not exist", source_dir.display()).into());
    }

    let mut config = GenerateConfig::new(&source_dir);
    let mut solc = None;
    if let Some(manifest) = manifest::load(&source_dir)? {
        solc = manifest.solc.clone();
        config = config.with_manifest(manifest);
    }
    if let Some(artifacts) = &args.artifacts {
        config.artifacts_dir = artifacts.clone();
    }
    if let Some(module) = &args.runtime_module {
        config.dialect.runtime_module = module.clone();
    }
    if let Some(param) = &args.runner_param {
        config.dialect.runner_param = param.clone();
    }
    if let Some(program) = &args.solc {
        solc = Some(program.clone());
    }

    let compiler: Box<dyn Compiler> = if args.skip_compile {
        Box::new(Precompiled)
    } else {
        Box::new(solc.map(Solc::new).unwrap_or_default())
    };

    let report = ops::generate(&config, compiler.as_ref())?;
    if !report.is_success() {
        return Err(eyre!(
            "no bindings were generated from {} artifact(s)",
            report.artifacts
        )
        .into());
    }
    Ok(())
}
