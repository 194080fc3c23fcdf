// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod abi;
pub mod compile;
pub mod emit;
pub mod manifest;
pub mod signature;
pub mod types;
