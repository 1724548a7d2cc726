// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Library error type

use thiserror::Error;

/// Errors raised when building history structures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A constructor argument violated its precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
