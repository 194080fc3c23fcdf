// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::{fs, path::Path};

pub mod color;
pub mod sys;

pub(crate) mod solc;

/// Check if a directory exists, creating it and its parents if not.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Turns an arbitrary contract name into a valid TypeScript identifier.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`, and a leading digit is prefixed with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if ident.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_identifiers() {
        assert_eq!(sanitize_identifier("ERC20"), "ERC20");
        assert_eq!(sanitize_identifier("Token-V2.1"), "Token_V2_1");
        assert_eq!(sanitize_identifier("1inch"), "_1inch");
        assert_eq!(sanitize_identifier(""), "_");
    }

    #[test]
    fn creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        create_dir_if_dne(&nested).unwrap();
        assert!(nested.is_dir());
        create_dir_if_dne(&nested).unwrap();
    }
}
