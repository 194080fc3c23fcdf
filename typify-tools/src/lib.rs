// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for generating typed contract bindings.
//!
//! The pipeline runs leaves first: an artifact is loaded into an
//! [`AbiDocument`](crate::core::abi::AbiDocument), every function item is turned into a
//! [`FunctionSignature`](crate::core::signature::FunctionSignature) by resolving its ABI type
//! strings to host types, and the [`Emitter`](crate::core::emit::Emitter) renders one
//! TypeScript module per contract. [`ops::generate`] drives the whole batch.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
