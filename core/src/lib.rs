//! Instruction-set descriptor compiler.
//!
//! Turns a declarative description of a virtual machine's instruction set
//! into a stable numeric encoding and bidirectional lookup structures, and
//! renders them into a target consumer's native form. The pipeline is a
//! strictly sequential chain of pure stages:
//!
//! 1. [`schema`] — parse and validate the raw specification into an
//!    [`InstructionSetDescriptor`].
//! 2. [`opcode`] — assign each instruction a dense, zero-based code by
//!    position.
//! 3. [`tables`] — build the name→record and code→name lookup tables.
//! 4. [`emit`] — render the enumeration and tables through an [`Emitter`].
//!
//! Each stage consumes an immutable result from its predecessor; the only
//! observable side effect is the caller persisting the rendered artifact.

pub mod emit;
pub mod error;
pub mod opcode;
pub mod schema;
pub mod tables;

use std::path::Path;

pub use emit::{Artifact, CppHeaderEmitter, Emitter, RustModuleEmitter};
pub use error::{Error, Result};
pub use opcode::OpcodeAssignment;
pub use schema::{ArgumentKind, InstructionSetDescriptor, InstructionSpec};
pub use tables::{LookupTables, OpcodeInfo};

/// Everything one compilation run derives from a specification document.
///
/// The descriptor is immutable once loaded; independent emissions for
/// different target consumers can all feed off one `Compilation`.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub descriptor: InstructionSetDescriptor,
    pub assignment: OpcodeAssignment,
    pub tables: LookupTables,
    pub artifact: Artifact,
}

impl Compilation {
    /// Renders the artifact for one target consumer.
    pub fn render(&self, emitter: &dyn Emitter) -> String {
        tracing::debug!(target_consumer = emitter.target(), "rendering artifact");
        emitter.render(&self.artifact)
    }
}

/// Runs the full pipeline on a specification document.
pub fn compile(source: &str) -> Result<Compilation> {
    let descriptor = schema::load_str(source)?;
    let assignment = opcode::assign(&descriptor);
    let tables = tables::build(&descriptor, &assignment);
    let artifact = Artifact::new(&descriptor, &assignment);
    Ok(Compilation {
        descriptor,
        assignment,
        tables,
        artifact,
    })
}

/// Reads and compiles a specification document from disk.
pub fn compile_path(path: &Path) -> Result<Compilation> {
    let source =
        std::fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    compile(&source)
}

/// Persists a rendered artifact.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| Error::SinkUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
