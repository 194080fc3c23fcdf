// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Generate bindings for every contract of a source directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        abi::{load_artifact, LoadError},
        compile::Compiler,
        emit::{Dialect, EmitError, Emitter, BINDING_EXTENSION},
        manifest::Manifest,
        signature::derive_all,
    },
    Result,
};

/// Directory artifacts are written to, relative to the source directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateConfig {
    pub source_dir: PathBuf,
    pub artifacts_dir: PathBuf,
    pub artifact_extension: String,
    pub binding_extension: String,
    pub dialect: Dialect,
}

impl GenerateConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        Self {
            artifacts_dir: source_dir.join(DEFAULT_ARTIFACTS_DIR),
            source_dir,
            artifact_extension: DEFAULT_ARTIFACT_EXTENSION.into(),
            binding_extension: BINDING_EXTENSION.into(),
            dialect: Dialect::default(),
        }
    }

    /// Applies the fields set in a manifest.
    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        if let Some(artifacts) = manifest.artifacts {
            self.artifacts_dir = self.source_dir.join(artifacts);
        }
        if let Some(extension) = manifest.artifact_extension {
            self.artifact_extension = extension;
        }
        if let Some(extension) = manifest.binding_extension {
            self.binding_extension = extension;
        }
        if let Some(dialect) = manifest.dialect {
            self.dialect = dialect;
        }
        self
    }
}

/// An artifact that did not produce a binding.
#[derive(Debug)]
pub struct SkippedArtifact {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub artifacts: usize,
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<SkippedArtifact>,
}

impl GenerateReport {
    /// A run succeeds if it had nothing to do or wrote at least one binding.
    pub fn is_success(&self) -> bool {
        self.artifacts == 0 || !self.generated.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
enum ArtifactError {
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("{0}")]
    Emit(#[from] EmitError),
    #[error("failed to write binding: {0}")]
    Write(#[from] std::io::Error),
}

/// Compiles the sources, then writes a binding beside every artifact.
///
/// Compilation failures abort the run. Artifacts which cannot be loaded or rendered are
/// reported and skipped.
pub fn generate(config: &GenerateConfig, compiler: &dyn Compiler) -> Result<GenerateReport> {
    info!(@grey, "Compiling contracts in {}...", config.source_dir.display());
    compiler.compile(&config.source_dir, &config.artifacts_dir)?;
    info!(@grey, "Compiled contracts into {}", config.artifacts_dir.display());

    let emitter = Emitter::new(config.dialect.clone());
    let artifacts = find_artifacts(&config.artifacts_dir, &config.artifact_extension)?;
    let mut report = GenerateReport {
        artifacts: artifacts.len(),
        ..Default::default()
    };

    for artifact in artifacts {
        match generate_binding(&artifact, config, &emitter) {
            Ok(binding) => report.generated.push(binding),
            Err(err) => {
                warn!(@yellow, "skipping {}: {err}", artifact.display());
                report.skipped.push(SkippedArtifact {
                    path: artifact,
                    reason: err.to_string(),
                });
            }
        }
    }

    if report.artifacts == 0 {
        warn!(@yellow, "no .{} artifacts found in {}", config.artifact_extension, config.artifacts_dir.display());
    }
    info!(
        @mint,
        "Generated {} binding(s), skipped {}",
        report.generated.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Artifact files below a directory, sorted by path.
pub fn find_artifacts(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/*.{extension}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut artifacts = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(glob::GlobError::into_error)?;
        if path.is_file() {
            artifacts.push(path);
        }
    }
    artifacts.sort();
    Ok(artifacts)
}

fn generate_binding(
    artifact: &Path,
    config: &GenerateConfig,
    emitter: &Emitter,
) -> Result<PathBuf, ArtifactError> {
    let contract_name = artifact
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{contract_name}.{}", config.binding_extension);
    info!(@grey, "Generating {file_name}...");

    let abi = load_artifact(artifact)?;
    debug!(@grey, "{contract_name}: {}", abi.summary());
    let signatures = derive_all(&abi);
    for signature in signatures.iter().filter(|sig| sig.has_unknown_types()) {
        debug!(@grey, "{contract_name}.{} uses types without a mapping", signature.name);
    }

    let module = emitter.render(&contract_name, &abi, &signatures)?;
    for name in &module.overloaded {
        warn!(@yellow, "{contract_name}.{name} is overloaded, only its last declaration is bound");
    }

    let path = artifact.with_file_name(module.file_name(&config.binding_extension));
    fs::write(&path, &module.source)?;
    info!(@mint, "Generated {file_name}");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::json;

    use super::*;
    use crate::{
        core::compile::{CompileError, Precompiled},
        Error,
    };

    /// Writes fixed artifacts instead of running a compiler.
    struct FakeCompiler {
        artifacts: Vec<(&'static str, String)>,
        calls: Cell<usize>,
    }

    impl FakeCompiler {
        fn new(artifacts: Vec<(&'static str, String)>) -> Self {
            Self {
                artifacts,
                calls: Cell::new(0),
            }
        }
    }

    impl Compiler for FakeCompiler {
        fn compile(&self, _source_dir: &Path, output_dir: &Path) -> Result<(), CompileError> {
            self.calls.set(self.calls.get() + 1);
            fs::create_dir_all(output_dir)?;
            for (name, contents) in &self.artifacts {
                fs::write(output_dir.join(name), contents)?;
            }
            Ok(())
        }
    }

    struct FailingCompiler;

    impl Compiler for FailingCompiler {
        fn compile(&self, _source_dir: &Path, output_dir: &Path) -> Result<(), CompileError> {
            Err(CompileError::MissingArtifacts(output_dir.to_path_buf()))
        }
    }

    fn token_artifact() -> String {
        json!({
            "abi": [{
                "type": "function",
                "name": "transfer",
                "inputs": [
                    { "name": "to", "type": "address", "internalType": "address" },
                    { "name": "value", "type": "uint256", "internalType": "uint256" }
                ],
                "outputs": [],
                "stateMutability": "nonpayable"
            }]
        })
        .to_string()
    }

    #[test]
    fn bad_artifacts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path());
        let compiler = FakeCompiler::new(vec![
            ("Broken.json", "{ nope".into()),
            ("NotAbi.json", r#"{"notAbi": []}"#.into()),
            ("Token.json", token_artifact()),
        ]);

        let report = generate(&config, &compiler).unwrap();
        assert_eq!(compiler.calls.get(), 1);
        assert_eq!(report.artifacts, 3);
        assert!(report.is_success());
        assert_eq!(report.generated, vec![config.artifacts_dir.join("Token.ts")]);

        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|skipped| skipped.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(skipped, ["Broken.json", "NotAbi.json"]);
        assert!(report.skipped[0].reason.starts_with("malformed document"));
        assert!(report.skipped[1].reason.contains("`abi` array"));

        let binding = fs::read_to_string(config.artifacts_dir.join("Token.ts")).unwrap();
        assert!(binding.contains(
            "\ttransfer(to: AddressLike, value: bigint): Promise<ContractTransaction>\n"
        ));
        assert!(!config.artifacts_dir.join("NotAbi.ts").exists());
    }

    #[test]
    fn all_bad_artifacts_fail_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path());
        let compiler = FakeCompiler::new(vec![("NotAbi.json", r#"{"notAbi": []}"#.into())]);

        let report = generate(&config, &compiler).unwrap();
        assert!(!report.is_success());
        assert!(report.generated.is_empty());
    }

    #[test]
    fn no_artifacts_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path());
        let report = generate(&config, &FakeCompiler::new(vec![])).unwrap();
        assert_eq!(report.artifacts, 0);
        assert!(report.is_success());
    }

    #[test]
    fn compiler_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path());
        let err = generate(&config, &FailingCompiler).unwrap_err();
        assert!(matches!(err, Error::Compile(_)));
        assert!(!config.artifacts_dir.exists());
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path());
        let compiler = FakeCompiler::new(vec![("Token.json", token_artifact())]);

        generate(&config, &compiler).unwrap();
        let first = fs::read(config.artifacts_dir.join("Token.ts")).unwrap();
        generate(&config, &compiler).unwrap();
        let second = fs::read(config.artifacts_dir.join("Token.ts")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn nested_artifacts_get_bindings_beside_them() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path());
        let nested = config.artifacts_dir.join("tokens");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Token.json"), token_artifact()).unwrap();
        fs::write(config.artifacts_dir.join("notes.txt"), "not an artifact").unwrap();

        let report = generate(&config, &Precompiled).unwrap();
        assert_eq!(report.artifacts, 1);
        assert_eq!(report.generated, vec![nested.join("Token.ts")]);
    }

    #[test]
    fn source_dir_with_glob_characters() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path().join("contracts[v2]"));
        fs::create_dir_all(&config.artifacts_dir).unwrap();
        fs::write(config.artifacts_dir.join("Token.json"), token_artifact()).unwrap();

        let report = generate(&config, &Precompiled).unwrap();
        assert_eq!(report.artifacts, 1);
        assert_eq!(report.generated, vec![config.artifacts_dir.join("Token.ts")]);
        assert_eq!(
            find_artifacts(&config.artifacts_dir, "json").unwrap(),
            vec![config.artifacts_dir.join("Token.json")]
        );
    }

    #[test]
    fn manifest_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path()).with_manifest(Manifest {
            artifacts: Some("build".into()),
            binding_extension: Some("mts".into()),
            dialect: Some(Dialect {
                runtime_module: "ethers".into(),
                runner_param: "signer".into(),
            }),
            ..Default::default()
        });
        assert_eq!(config.artifacts_dir, dir.path().join("build"));
        assert_eq!(config.artifact_extension, "json");

        let compiler = FakeCompiler::new(vec![("Token.json", token_artifact())]);
        let report = generate(&config, &compiler).unwrap();
        assert_eq!(report.generated, vec![dir.path().join("build").join("Token.mts")]);
        let binding = fs::read_to_string(&report.generated[0]).unwrap();
        assert!(binding.contains("signer: ContractRunner"));
    }
}
