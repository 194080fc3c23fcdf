// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Loading and modeling Solidity JSON ABIs.
//!
//! An artifact is any JSON object with an `"abi"` array, such as the files written by
//! [`Solc`](crate::core::compile::Solc). Items keep the order they have in that array.

use std::{fmt, fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

/// Field of an artifact that holds the ABI items.
pub const ABI_FIELD: &str = "abi";

/// Errors which can occur while loading an artifact.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    #[error("document does not contain an `{ABI_FIELD}` array")]
    MissingAbiField,
}

/// A validated ABI, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct AbiDocument {
    raw: Vec<Value>,
    items: Vec<AbiItem>,
}

impl AbiDocument {
    /// Parses an artifact and extracts its ABI.
    pub fn from_artifact_str(text: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(text).map_err(LoadError::MalformedDocument)?;
        match value {
            Value::Object(mut fields) => match fields.remove(ABI_FIELD) {
                Some(Value::Array(items)) => Ok(Self::from_items(items)),
                _ => Err(LoadError::MissingAbiField),
            },
            _ => Err(LoadError::MissingAbiField),
        }
    }

    /// Builds a document from raw ABI items.
    ///
    /// Items whose shape is not understood are kept in the literal but modeled as
    /// [`AbiItem::Unknown`], so they never produce a partial binding.
    pub fn from_items(raw: Vec<Value>) -> Self {
        let items = raw
            .iter()
            .enumerate()
            .map(|(index, value)| {
                AbiItem::deserialize(value).unwrap_or_else(|err| {
                    debug!(@grey, "ignoring abi item #{index}: {err}");
                    AbiItem::Unknown
                })
            })
            .collect();
        Self { raw, items }
    }

    /// The ABI items exactly as they appeared in the artifact.
    pub fn raw(&self) -> &[Value] {
        &self.raw
    }

    pub fn items(&self) -> &[AbiItem] {
        &self.items
    }

    /// Iterates over the callable function items.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.items.iter().filter_map(|item| match item {
            AbiItem::Function(function) => Some(function),
            _ => None,
        })
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.items.iter().find_map(|item| match item {
            AbiItem::Constructor(constructor) => Some(constructor),
            _ => None,
        })
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.items.iter().filter_map(|item| match item {
            AbiItem::Event(event) => Some(event),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.items.iter().filter_map(|item| match item {
            AbiItem::Error(error) => Some(error),
            _ => None,
        })
    }

    /// Counts the items of the document by kind.
    pub fn summary(&self) -> AbiSummary {
        AbiSummary {
            functions: self.functions().count(),
            mutating: self
                .functions()
                .filter(|function| function.state_mutability.is_mutating())
                .count(),
            events: self.events().count(),
            errors: self.errors().count(),
            constructor: self.constructor().is_some(),
        }
    }
}

/// Item counts of an [`AbiDocument`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbiSummary {
    pub functions: usize,
    /// Functions which send a transaction when called.
    pub mutating: usize,
    pub events: usize,
    pub errors: usize,
    pub constructor: bool,
}

impl fmt::Display for AbiSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} function(s) ({} mutating), {} event(s), {} error(s)",
            self.functions, self.mutating, self.events, self.errors
        )?;
        if self.constructor {
            write!(f, ", constructor")?;
        }
        Ok(())
    }
}

/// Reads and loads an artifact file.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<AbiDocument, LoadError> {
    let text = fs::read_to_string(path)?;
    AbiDocument::from_artifact_str(&text)
}

/// One entry of a JSON ABI.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AbiItem {
    Function(Function),
    Constructor(Constructor),
    Event(Event),
    Error(Error),
    Fallback(Fallback),
    Receive(Receive),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Argument>,
    #[serde(default)]
    pub outputs: Vec<Argument>,
    #[serde(default)]
    pub state_mutability: StateMutability,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    #[serde(default)]
    pub inputs: Vec<Argument>,
    #[serde(default)]
    pub state_mutability: StateMutability,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<EventParam>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Error {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Argument>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallback {
    #[serde(default)]
    pub state_mutability: StateMutability,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receive {
    #[serde(default = "StateMutability::payable")]
    pub state_mutability: StateMutability,
}

/// A function, constructor or error parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub internal_type: String,
    /// Members of a `tuple` type.
    #[serde(default)]
    pub components: Vec<Argument>,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        let ty = ty.into();
        Self {
            internal_type: ty.clone(),
            ty,
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// The canonical type used in function signatures, with tuples expanded.
    pub fn canonical_type(&self) -> String {
        match self.ty.strip_prefix("tuple") {
            Some(suffix) => {
                let members: Vec<_> = self.components.iter().map(Self::canonical_type).collect();
                format!("({}){suffix}", members.join(","))
            }
            None => self.ty.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EventParam {
    #[serde(flatten)]
    pub argument: Argument,
    #[serde(default)]
    pub indexed: bool,
}

/// How a function interacts with chain state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Constant,
    #[default]
    NonPayable,
    Payable,
}

impl StateMutability {
    fn payable() -> Self {
        Self::Payable
    }

    /// Whether calling the function can change chain state.
    pub fn is_mutating(self) -> bool {
        matches!(self, Self::NonPayable | Self::Payable)
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure => write!(f, "pure"),
            Self::View => write!(f, "view"),
            Self::Constant => write!(f, "constant"),
            Self::NonPayable => write!(f, "nonpayable"),
            Self::Payable => write!(f, "payable"),
        }
    }
}
