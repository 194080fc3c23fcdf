// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Mapping of Solidity ABI type strings to TypeScript host types.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// Position of a type in a call.
///
/// Inputs accept loosely-typed convenience values, outputs are normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Input,
    Output,
}

/// Host type an ABI type resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    /// Arbitrary-precision integer.
    Integer,
    /// Hex string, byte array or anything else the runtime accepts as bytes.
    BytesLike,
    /// Hex string or anything the runtime can resolve to an address.
    AddressLike,
    /// Normalized `0x`-prefixed hex string.
    HexString,
    String,
    Bool,
    /// Fallback for types without a mapping, such as tuples.
    Unknown,
    /// Ordered sequence of the inner type.
    Array(Box<HostType>),
}

impl HostType {
    /// TypeScript spelling of this type.
    pub fn render(&self) -> String {
        match self {
            Self::Integer => "bigint".into(),
            Self::BytesLike => "BytesLike".into(),
            Self::AddressLike => "AddressLike".into(),
            Self::HexString => "`0x${string}`".into(),
            Self::String => "string".into(),
            Self::Bool => "boolean".into(),
            Self::Unknown => "unknown".into(),
            Self::Array(inner) => format!("{}[]", inner.render()),
        }
    }

    /// Type names this type needs from the runtime module.
    pub fn runtime_imports(&self) -> Option<&'static str> {
        match self {
            Self::BytesLike => Some("BytesLike"),
            Self::AddressLike => Some("AddressLike"),
            Self::Array(inner) => inner.runtime_imports(),
            _ => None,
        }
    }

    /// Whether the type, or any element type, is the fallback.
    pub fn is_unknown(&self) -> bool {
        match self {
            Self::Unknown => true,
            Self::Array(inner) => inner.is_unknown(),
            _ => false,
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

struct TypeMapping {
    patterns: Vec<Regex>,
    input: HostType,
    output: HostType,
}

impl TypeMapping {
    fn new(patterns: &[&str], input: HostType, output: HostType) -> Self {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern).expect("valid type pattern"))
            .collect();
        Self {
            patterns,
            input,
            output,
        }
    }

    fn matches(&self, base: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(base))
    }

    fn get(&self, mode: Mode) -> &HostType {
        match mode {
            Mode::Input => &self.input,
            Mode::Output => &self.output,
        }
    }
}

lazy_static! {
    /// Base type mappings in priority order.
    static ref TYPE_MAPPINGS: Vec<TypeMapping> = vec![
        TypeMapping::new(
            &[r"^u?int[0-9]*$", r"^u?fixed[0-9x]*$"],
            HostType::Integer,
            HostType::Integer,
        ),
        TypeMapping::new(&[r"^bytes[0-9]*$"], HostType::BytesLike, HostType::HexString),
        TypeMapping::new(&[r"^string$"], HostType::String, HostType::String),
        TypeMapping::new(&[r"^bool$"], HostType::Bool, HostType::Bool),
        TypeMapping::new(&[r"^address$"], HostType::AddressLike, HostType::HexString),
    ];
}

/// Resolves an ABI type string to its host type.
///
/// Each trailing `[]` wraps the result in [`HostType::Array`]. Base types without a mapping
/// resolve to [`HostType::Unknown`].
pub fn resolve(ty: &str, mode: Mode) -> HostType {
    let mut base = ty;
    let mut depth = 0;
    while let Some(inner) = base.strip_suffix("[]") {
        base = inner;
        depth += 1;
    }

    let mut resolved = match TYPE_MAPPINGS.iter().find(|mapping| mapping.matches(base)) {
        Some(mapping) => mapping.get(mode).clone(),
        None => {
            debug!(@grey, "no host type for abi type `{base}`, falling back to unknown");
            HostType::Unknown
        }
    };
    for _ in 0..depth {
        resolved = HostType::Array(Box::new(resolved));
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::{HostType::*, *};

    fn array(inner: HostType) -> HostType {
        Array(Box::new(inner))
    }

    #[test]
    fn integers() {
        for ty in [
            "uint", "uint8", "uint256", "int", "int128", "fixed", "ufixed", "fixed128x18",
        ] {
            assert_eq!(resolve(ty, Mode::Input), Integer, "{ty}");
            assert_eq!(resolve(ty, Mode::Output), Integer, "{ty}");
        }
    }

    #[test]
    fn bytes_are_loose_in_and_hex_out() {
        for ty in ["bytes", "bytes1", "bytes32"] {
            assert_eq!(resolve(ty, Mode::Input), BytesLike);
            assert_eq!(resolve(ty, Mode::Output), HexString);
        }
    }

    #[test]
    fn addresses_are_loose_in_and_hex_out() {
        assert_eq!(resolve("address", Mode::Input), AddressLike);
        assert_eq!(resolve("address", Mode::Output), HexString);
    }

    #[test]
    fn strings_and_bools() {
        assert_eq!(resolve("string", Mode::Input), String);
        assert_eq!(resolve("string", Mode::Output), String);
        assert_eq!(resolve("bool", Mode::Input), Bool);
        assert_eq!(resolve("bool", Mode::Output), Bool);
    }

    #[test]
    fn arrays_nest() {
        assert_eq!(resolve("uint256[]", Mode::Input), array(Integer));
        assert_eq!(resolve("uint256[][]", Mode::Output), array(array(Integer)));
        assert_eq!(resolve("address[]", Mode::Input), array(AddressLike));
        assert_eq!(resolve("bytes32[][]", Mode::Output), array(array(HexString)));
    }

    #[test]
    fn unmapped_types_fall_back() {
        for ty in ["tuple", "tuple[]", "function", "uint8[3]", "string[2][]", "", "[]", "Uint256"] {
            assert!(resolve(ty, Mode::Input).is_unknown(), "{ty}");
        }
        assert_eq!(resolve("tuple[]", Mode::Output), array(Unknown));
        assert_eq!(resolve("[]", Mode::Output), array(Unknown));
    }

    #[test]
    fn renders_typescript() {
        assert_eq!(resolve("uint256", Mode::Input).render(), "bigint");
        assert_eq!(resolve("bytes32", Mode::Output).render(), "`0x${string}`");
        assert_eq!(resolve("address[][]", Mode::Input).render(), "AddressLike[][]");
        assert_eq!(resolve("bool", Mode::Output).to_string(), "boolean");
        assert_eq!(Unknown.render(), "unknown");
    }

    #[test]
    fn runtime_imports() {
        assert_eq!(resolve("bytes[]", Mode::Input).runtime_imports(), Some("BytesLike"));
        assert_eq!(resolve("address", Mode::Input).runtime_imports(), Some("AddressLike"));
        assert_eq!(resolve("address", Mode::Output).runtime_imports(), None);
    }
}
