// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    ffi::OsStr,
    process::{Command, Stdio},
};

/// Whether `program --version` can be run successfully.
pub fn command_exists(program: impl AsRef<OsStr>) -> bool {
    Command::new(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .arg("--version")
        .output()
        .map(|x| x.status.success())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_does_not_exist() {
        assert!(!command_exists("typify-definitely-not-a-real-binary"));
    }
}
