// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Unknown tokens met while reading enum-valued columns or CLI arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown member '{0}' (expected a or b)")]
    Member(String),

    #[error("unknown split method '{0}' (expected equal|percent|fixed)")]
    SplitMethod(String),

    #[error("unknown savings movement type '{0}' (expected deposit|payout)")]
    MovementKind(String),

    #[error("unknown payout priority '{0}' (expected a or b)")]
    Priority(String),
}
