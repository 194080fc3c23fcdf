// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Colored wrappers around the [`log`] macros.

macro_rules! colored {
    ($level:ident, @$color:ident, $($arg:tt)*) => {{
        use crate::utils::color::Color;
        let msg = format!($($arg)*);
        log::$level!("{}", msg.$color())
    }};
}

macro_rules! debug {
    (@$color:ident, $($arg:tt)*) => {
        colored!(debug, @$color, $($arg)*)
    };
}

macro_rules! info {
    (@$color:ident, $($arg:tt)*) => {
        colored!(info, @$color, $($arg)*)
    };
}

macro_rules! warn {
    (@$color:ident, $($arg:tt)*) => {
        colored!(warn, @$color, $($arg)*)
    };
}
