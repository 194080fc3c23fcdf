// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Rendering of TypeScript binding modules.
//!
//! A binding module is self-contained: it embeds the ABI it was generated from, declares a
//! contract type with one member per function, and exports a factory that connects the ABI to
//! an address through the runtime's `Contract` class. Rendering is deterministic so regenerated
//! files only change when their ABI does.

use std::{
    collections::{BTreeSet, HashSet},
    fmt::Write,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    abi::AbiDocument,
    signature::{FunctionSignature, Parameter, ReturnRule},
};
use crate::utils::sanitize_identifier;

/// Extension of generated binding files.
pub const BINDING_EXTENSION: &str = "ts";

const TRANSACTION_HANDLE: &str = "ContractTransaction";
const RUNNER_TYPE: &str = "ContractRunner";

/// Words which cannot name a TypeScript parameter.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("from utf8 error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

/// Output flavour of the generated modules.
///
/// Runtime libraries that share the `ethers` v6 API differ in where their types are imported
/// from and in how the runner parameter of the factory is named.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Module the runtime types are imported from.
    pub runtime_module: String,
    /// Name of the runner parameter of the generated factory.
    pub runner_param: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            runtime_module: "ethers".into(),
            runner_param: "runner".into(),
        }
    }
}

/// A rendered binding for one contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingModule {
    pub contract_name: String,
    pub abi_literal: String,
    pub type_name: String,
    pub factory_name: String,
    pub source: String,
    /// Function names declared more than once, of which only the last declaration is bound.
    pub overloaded: Vec<String>,
}

impl BindingModule {
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.contract_name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Emitter {
    dialect: Dialect,
}

impl Emitter {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Renders the binding module of a contract.
    pub fn render(
        &self,
        contract_name: &str,
        abi: &AbiDocument,
        signatures: &[FunctionSignature],
    ) -> Result<BindingModule, EmitError> {
        let ident = sanitize_identifier(contract_name);
        let abi_name = format!("{ident}_abi");
        let type_name = format!("{ident}_Contract");
        let factory_name = format!("connect_{ident}");
        let runner = parameter_name(&self.dialect.runner_param, 0);

        // Later declarations replace earlier ones but keep their position.
        let mut members: IndexMap<&str, &FunctionSignature> = IndexMap::new();
        let mut overloaded = Vec::new();
        for signature in signatures {
            if members.insert(&signature.name, signature).is_some()
                && !overloaded.contains(&signature.name)
            {
                overloaded.push(signature.name.clone());
            }
        }

        let abi_literal = abi_literal(abi)?;

        let mut source = String::new();
        writeln!(
            source,
            "// This file was generated by typify-contracts from the `{contract_name}` ABI. Do not edit."
        )?;
        writeln!(source)?;
        writeln!(
            source,
            "import {{ {} }} from {:?}",
            imports(members.values().copied()).join(", "),
            self.dialect.runtime_module
        )?;
        writeln!(source)?;

        writeln!(source, "export const {abi_name} = {abi_literal} as const")?;
        writeln!(source)?;

        if members.is_empty() {
            writeln!(source, "export type {type_name} = Contract & {{}}")?;
        } else {
            writeln!(source, "export type {type_name} = Contract & {{")?;
            for signature in members.values() {
                writeln!(
                    source,
                    "\t/** `{}` selector `0x{}`, {} */",
                    signature.canonical,
                    hex::encode(signature.selector),
                    signature.state_mutability
                )?;
                writeln!(source, "\t{}", member(signature))?;
            }
            writeln!(source, "}}")?;
        }
        writeln!(source)?;

        writeln!(
            source,
            "export const {factory_name} = (address: string | Addressable, {runner}: {RUNNER_TYPE}): {type_name} =>"
        )?;
        writeln!(
            source,
            "\tnew Contract(address, {abi_name}, {runner}) as {type_name}"
        )?;

        Ok(BindingModule {
            contract_name: contract_name.to_string(),
            abi_literal,
            type_name,
            factory_name,
            source,
            overloaded,
        })
    }
}

/// Serializes the ABI items verbatim, indented with tabs.
fn abi_literal(abi: &AbiDocument) -> Result<String, EmitError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    abi.raw().serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Runtime names used by a module, sorted.
fn imports<'a>(members: impl Iterator<Item = &'a FunctionSignature>) -> Vec<String> {
    let mut types = BTreeSet::from(["Addressable", RUNNER_TYPE]);
    for signature in members {
        types.extend(
            signature
                .parameters
                .iter()
                .filter_map(|param| param.ty.runtime_imports()),
        );
        if signature.returns == ReturnRule::TransactionHandle {
            types.insert(TRANSACTION_HANDLE);
        }
    }
    std::iter::once("Contract".to_string())
        .chain(types.into_iter().map(|ty| format!("type {ty}")))
        .collect()
}

fn member(signature: &FunctionSignature) -> String {
    let params: Vec<_> = parameter_names(&signature.parameters)
        .into_iter()
        .zip(&signature.parameters)
        .map(|(name, param)| format!("{name}: {}", param.ty))
        .collect();
    format!(
        "{}({}): Promise<{}>",
        signature.name,
        params.join(", "),
        return_type(&signature.returns)
    )
}

/// Distinct identifiers for a parameter list. A name already taken gets the parameter's index
/// appended, counting up until it is free.
fn parameter_names(params: &[Parameter]) -> Vec<String> {
    let mut seen = HashSet::new();
    params
        .iter()
        .enumerate()
        .map(|(index, param)| {
            let base = parameter_name(&param.name, index);
            let mut name = base.clone();
            let mut suffix = index;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

fn return_type(returns: &ReturnRule) -> String {
    match returns {
        ReturnRule::TransactionHandle => TRANSACTION_HANDLE.to_string(),
        ReturnRule::Bare(ty) => ty.render(),
        ReturnRule::Tuple(outputs) => {
            let elements: Vec<_> = if labels_allowed(outputs) {
                outputs
                    .iter()
                    .enumerate()
                    .map(|(index, output)| {
                        format!("{}: {}", parameter_name(&output.name, index), output.ty)
                    })
                    .collect()
            } else {
                outputs.iter().map(|output| output.ty.render()).collect()
            };
            format!("readonly [{}]", elements.join(", "))
        }
    }
}

/// Tuple members must either all be labeled or none, and labels must be distinct once
/// rewritten into identifiers.
fn labels_allowed(outputs: &[Parameter]) -> bool {
    let mut seen = HashSet::new();
    outputs.iter().enumerate().all(|(index, output)| {
        !output.name.is_empty() && seen.insert(parameter_name(&output.name, index))
    })
}

fn parameter_name(name: &str, index: usize) -> String {
    if name.is_empty() {
        return format!("arg{index}");
    }
    let ident = sanitize_identifier(name);
    if RESERVED_WORDS.contains(&ident.as_str()) {
        format!("_{ident}")
    } else {
        ident
    }
}
