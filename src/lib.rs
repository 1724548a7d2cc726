// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Navstack library - bounded navigation history for graph views
//!
//! The core is [`history::BoundedHistoryStack`], a LIFO container with a
//! fixed depth that silently drops its oldest entry when full. It sits on
//! the singly linked list in [`linked_list`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod linked_list;

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::HistoryError;
    pub use crate::history::{BoundedHistoryStack, DEFAULT_MAX_DEPTH};
    pub use crate::linked_list::{LinkedList, Node};
    pub use anyhow::{Context, Result};
}
