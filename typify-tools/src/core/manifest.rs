// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Optional `Typify.toml` project configuration.
//!
//! ```toml
//! artifacts = "artifacts"
//! artifact_extension = "json"
//! binding_extension = "ts"
//! solc = "solc"
//!
//! [dialect]
//! runtime_module = "ethers"
//! runner_param = "runner"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use super::emit::Dialect;

/// Filename of the manifest, looked up in the source directory.
pub const FILENAME: &str = "Typify.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error in {path}: {source}")]
    TomlRead {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Every field is optional; missing ones keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Artifact directory, relative to the source directory.
    pub artifacts: Option<PathBuf>,
    pub artifact_extension: Option<String>,
    pub binding_extension: Option<String>,
    /// Path of the `solc` binary.
    pub solc: Option<PathBuf>,
    pub dialect: Option<Dialect>,
}

/// Loads the manifest of a source directory, if it has one.
pub fn load(source_dir: impl AsRef<Path>) -> Result<Option<Manifest>, ManifestError> {
    let path = source_dir.as_ref().join(FILENAME);
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let manifest = toml::from_str(&contents).map_err(|source| ManifestError::TomlRead {
        path: path.clone(),
        source,
    })?;
    debug!(@grey, "loaded {}", path.display());
    Ok(Some(manifest))
}
