// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Replay command - applies a script of stack operations and prints the result

use crate::config::Config;
use crate::history::BoundedHistoryStack;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// A single stack operation in a replay script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `push:<value>`
    Push(String),
    /// `pop`
    Pop,
    /// `peek`
    Peek,
    /// `clear`
    Clear,
    /// `len`
    Len,
    /// `empty`
    Empty,
}

/// Errors found while reading a replay script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Token is not a known operation
    #[error("unknown operation `{token}` at position {position} (valid: push:<value>, pop, peek, clear, len, empty)")]
    UnknownOperation {
        /// 1-based position (line number for script files)
        position: usize,
        /// The offending token
        token: String,
    },
    /// `push` without a value
    #[error("push at position {position} needs a value (push:<value>)")]
    MissingValue {
        /// 1-based position (line number for script files)
        position: usize,
    },
}

impl Op {
    /// Parse one operation token
    pub fn parse(token: &str, position: usize) -> Result<Self, ScriptError> {
        let token = token.trim();

        if let Some(value) = token.strip_prefix("push:") {
            if value.is_empty() {
                return Err(ScriptError::MissingValue { position });
            }
            return Ok(Self::Push(value.to_string()));
        }

        match token {
            "push" => Err(ScriptError::MissingValue { position }),
            "pop" => Ok(Self::Pop),
            "peek" => Ok(Self::Peek),
            "clear" => Ok(Self::Clear),
            "len" | "length" => Ok(Self::Len),
            "empty" | "is-empty" => Ok(Self::Empty),
            other => Err(ScriptError::UnknownOperation {
                position,
                token: other.to_string(),
            }),
        }
    }
}

/// Parse operations given one per token
pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<Op>, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| Op::parse(token.as_ref(), i + 1))
        .collect()
}

/// Parse a script file: one operation per line, `#` starts a comment line
pub fn parse_script(text: &str) -> Result<Vec<Op>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| Op::parse(line, i + 1))
        .collect()
}

/// Value produced by a replayed operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Output {
    /// Result of `pop`
    Pop {
        /// Removed entry
        value: Option<String>,
    },
    /// Result of `peek`
    Peek {
        /// Top entry
        value: Option<String>,
    },
    /// Result of `len`
    Len {
        /// Entry count
        value: usize,
    },
    /// Result of `empty`
    Empty {
        /// Whether the stack was empty
        value: bool,
    },
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pop { value } | Self::Peek { value } => {
                f.write_str(value.as_deref().unwrap_or("(none)"))
            }
            Self::Len { value } => write!(f, "{value}"),
            Self::Empty { value } => write!(f, "{value}"),
        }
    }
}

/// Apply `ops` in order, collecting the values they produce
pub fn apply(stack: &mut BoundedHistoryStack<String>, ops: &[Op]) -> Vec<Output> {
    let mut outputs = Vec::new();

    for op in ops {
        match op {
            Op::Push(value) => stack.push(value.clone()),
            Op::Pop => outputs.push(Output::Pop { value: stack.pop() }),
            Op::Peek => outputs.push(Output::Peek {
                value: stack.peek().cloned(),
            }),
            Op::Clear => stack.clear(),
            Op::Len => outputs.push(Output::Len { value: stack.len() }),
            Op::Empty => outputs.push(Output::Empty {
                value: stack.is_empty(),
            }),
        }
    }

    outputs
}

#[derive(Serialize)]
struct Report<'a> {
    max_depth: usize,
    outputs: &'a [Output],
    stack: &'a BoundedHistoryStack<String>,
}

/// Run the replay command
///
/// Operations from `file` run before those given on the command line.
pub fn run(
    ops: &[String],
    file: Option<PathBuf>,
    max_depth: Option<usize>,
    config: &Config,
    json: bool,
    color: bool,
) -> Result<()> {
    let depth = max_depth.unwrap_or(config.max_depth);

    let mut script = match &file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_script(&text).with_context(|| format!("Invalid script {}", path.display()))?
        }
        None => Vec::new(),
    };
    script.extend(parse_tokens(ops)?);

    let mut stack = BoundedHistoryStack::new(depth).context("Invalid history depth")?;

    info!("Replaying {} operation(s) with max depth {}", script.len(), depth);
    let outputs = apply(&mut stack, &script);

    if json {
        let report = Report {
            max_depth: depth,
            outputs: &outputs,
            stack: &stack,
        };
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{rendered}");
        return Ok(());
    }

    for output in &outputs {
        println!("{output}");
    }
    println!("{}", summary(&stack, color));

    Ok(())
}

/// One-line description of the final stack, top first
fn summary(stack: &BoundedHistoryStack<String>, color: bool) -> String {
    let label = format!("stack [{}/{}]", stack.len(), stack.max_depth());
    let entries = if stack.is_empty() {
        "(empty)".to_string()
    } else {
        stack
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    if color {
        format!("{}: {}", label.bold(), entries)
    } else {
        format!("{label}: {entries}")
    }
}
