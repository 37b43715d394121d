//! Subcommand implementations.
//!
//! Each command parses its own `Args`, builds a `Serialize` payload and hands
//! it to [`crate::output::render_mode`]. Commands that answer the chordality
//! question report it through [`Outcome`] so `main` can set the exit status.

pub mod bipartite;
pub mod check;
pub mod datasets;
pub mod order;

use std::fmt;
use std::process::ExitCode;

use chordal_core::{ChordalityConfig, ErrorCode, GraphError};

use crate::output::{CliError, OutputMode};

/// Settings shared by every command after flags, env and config files have
/// been layered.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub mode: OutputMode,
    pub chordality: ChordalityConfig,
    pub show_order: bool,
}

/// What a successful command run found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Chordal,
    NotChordal,
}

impl Outcome {
    #[must_use]
    pub const fn from_verdict(chordal: bool) -> Self {
        if chordal { Self::Chordal } else { Self::NotChordal }
    }

    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Done | Self::Chordal => ExitCode::SUCCESS,
            Self::NotChordal => ExitCode::from(1),
        }
    }
}

/// An application error that already knows its [`ErrorCode`].
#[derive(Debug)]
pub struct CodedError {
    pub code: ErrorCode,
    pub message: String,
}

impl CodedError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CodedError {}

/// Map a failed command to the structured error shown to the user.
#[must_use]
pub fn classify(err: &anyhow::Error) -> CliError {
    let message = format!("{err:#}");
    let code = err.chain().find_map(|cause| {
        if let Some(coded) = cause.downcast_ref::<CodedError>() {
            Some(coded.code)
        } else if let Some(graph) = cause.downcast_ref::<GraphError>() {
            Some(graph.code())
        } else if cause.downcast_ref::<std::io::Error>().is_some() {
            Some(ErrorCode::InputReadFailed)
        } else {
            None
        }
    });
    match code {
        Some(code) => CliError::new(message).with_code(code),
        None => CliError::new(message),
    }
}

/// Space-separated list used by the text renderers.
#[must_use]
pub fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
