//! Artifact emitters.
//!
//! The pipeline ends with a structured [`Artifact`]: an ordered list of
//! opcode rows carrying everything a target consumer needs (code, mnemonic,
//! documentation lines, operand kinds). What the artifact *contains* is
//! fixed here; how it is *spelled* belongs to an [`Emitter`] implementation,
//! one per target consumer.
//!
//! Determinism: rows preserve descriptor order and emitters traverse rows
//! only — never an unordered map — so a fixed input renders byte-identically
//! on every run and host.

mod cpp;
mod rust;

pub use cpp::CppHeaderEmitter;
pub use rust::RustModuleEmitter;

use crate::opcode::OpcodeAssignment;
use crate::schema::{ArgumentKind, InstructionSetDescriptor};

/// One emitted opcode: the row behind both the enumeration entry and the
/// forward/reverse table entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRow {
    pub code: u32,
    pub name: String,
    pub comments: Vec<String>,
    pub args: Vec<ArgumentKind>,
}

/// The structured, renderer-independent form of the compiled artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    rows: Vec<ArtifactRow>,
}

impl Artifact {
    /// Collects the assigned instructions into ordered rows.
    pub fn new(
        descriptor: &InstructionSetDescriptor,
        assignment: &OpcodeAssignment,
    ) -> Artifact {
        let rows = assignment
            .zip(descriptor)
            .map(|(code, spec)| ArtifactRow {
                code,
                name: spec.name.clone(),
                comments: spec.comments.clone(),
                args: spec.args.clone(),
            })
            .collect();
        Artifact { rows }
    }

    /// Rows in descriptor order; codes are `0..N`.
    pub fn rows(&self) -> &[ArtifactRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Renders an [`Artifact`] into one target consumer's native form.
///
/// Rendering produces the artifact's content only; persisting it is the
/// caller's concern.
pub trait Emitter {
    /// Human-readable name of the target consumer, for logs.
    fn target(&self) -> &'static str;

    fn render(&self, artifact: &Artifact) -> String;
}
