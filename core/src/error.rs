//! Descriptor compilation errors.
//!
//! One variant per failure kind, detected as early in the pipeline as
//! possible. A run either fully succeeds with one consistent artifact or
//! fails with zero output; there is no partial-success mode.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while compiling an instruction-set descriptor.
#[derive(Debug, Error)]
pub enum Error {
    /// The specification document could not be located or read.
    #[error("cannot read instruction specification `{}`: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The specification document could not be parsed into instruction
    /// records.
    #[error("malformed instruction specification: {detail}")]
    MalformedSource { detail: String },

    /// An instruction record names an operand token outside the closed
    /// argument-kind set.
    #[error(
        "unknown argument kind `{token}` in instruction `{instruction}` \
         (expected REGISTER, LITERAL or ADDRESS)"
    )]
    UnknownArgumentKind { token: String, instruction: String },

    /// Two instruction records share a mnemonic name.
    #[error(
        "duplicate instruction name `{name}` (records {first} and {second})"
    )]
    DuplicateInstructionName {
        name: String,
        first: usize,
        second: usize,
    },

    /// The rendered artifact could not be persisted.
    #[error("cannot write artifact `{}`: {source}", path.display())]
    SinkUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
