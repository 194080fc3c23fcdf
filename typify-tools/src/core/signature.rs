// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Derivation of typed call signatures from ABI function items.

use alloy_primitives::{keccak256, FixedBytes};

use super::{
    abi::{AbiDocument, AbiItem, Argument, Function, StateMutability},
    types::{resolve, HostType, Mode},
};

/// A named, typed slot in a parameter list or output tuple.
///
/// Anonymous arguments have an empty name but keep their position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: HostType,
}

impl Parameter {
    fn resolve(argument: &Argument, mode: Mode) -> Self {
        Self {
            name: argument.name.clone(),
            ty: resolve(&argument.ty, mode),
        }
    }
}

/// What a call resolves to, decided by the number of outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnRule {
    /// No outputs: the submitted transaction.
    TransactionHandle,
    /// Exactly one output, unwrapped.
    Bare(HostType),
    /// Two or more outputs, in ABI order.
    Tuple(Vec<Parameter>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub returns: ReturnRule,
    pub state_mutability: StateMutability,
    /// Solidity signature, e.g. `transfer(address,uint256)`.
    pub canonical: String,
    pub selector: FixedBytes<4>,
}

impl FunctionSignature {
    /// Whether any parameter or output fell back to the unknown type.
    pub fn has_unknown_types(&self) -> bool {
        let outputs = match &self.returns {
            ReturnRule::TransactionHandle => false,
            ReturnRule::Bare(ty) => ty.is_unknown(),
            ReturnRule::Tuple(outputs) => outputs.iter().any(|output| output.ty.is_unknown()),
        };
        outputs || self.parameters.iter().any(|param| param.ty.is_unknown())
    }
}

/// Derives the call signature of an ABI item.
///
/// Only `function` items are callable. Constructors describe deployment and, like events and
/// errors, yield `None`.
pub fn derive(item: &AbiItem) -> Option<FunctionSignature> {
    match item {
        AbiItem::Function(function) => Some(derive_function(function)),
        _ => None,
    }
}

pub fn derive_function(function: &Function) -> FunctionSignature {
    let parameters = function
        .inputs
        .iter()
        .map(|input| Parameter::resolve(input, Mode::Input))
        .collect();

    let returns = match function.outputs.as_slice() {
        [] => ReturnRule::TransactionHandle,
        [output] => ReturnRule::Bare(resolve(&output.ty, Mode::Output)),
        outputs => ReturnRule::Tuple(
            outputs
                .iter()
                .map(|output| Parameter::resolve(output, Mode::Output))
                .collect(),
        ),
    };

    let canonical = canonical_signature(function);
    let selector = FixedBytes::from_slice(&keccak256(canonical.as_bytes())[..4]);

    FunctionSignature {
        name: function.name.clone(),
        parameters,
        returns,
        state_mutability: function.state_mutability,
        canonical,
        selector,
    }
}

/// Derives signatures for every function of a document, in ABI order.
pub fn derive_all(abi: &AbiDocument) -> Vec<FunctionSignature> {
    abi.items().iter().filter_map(derive).collect()
}

fn canonical_signature(function: &Function) -> String {
    let inputs: Vec<_> = function.inputs.iter().map(Argument::canonical_type).collect();
    format!("{}({})", function.name, inputs.join(","))
}
