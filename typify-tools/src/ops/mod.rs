// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use generate::{
    find_artifacts, generate, GenerateConfig, GenerateReport, SkippedArtifact,
    DEFAULT_ARTIFACTS_DIR, DEFAULT_ARTIFACT_EXTENSION,
};

mod generate;
