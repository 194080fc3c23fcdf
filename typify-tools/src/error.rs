// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Compile(#[from] crate::core::compile::CompileError),
    #[error("{0}")]
    Load(#[from] crate::core::abi::LoadError),
    #[error("{0}")]
    Emit(#[from] crate::core::emit::EmitError),
    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("invalid artifact pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
