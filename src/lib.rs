//! Opset - an instruction-set descriptor compiler
//!
//! # Overview
//!
//! Opset compiles a declarative JSON description of a virtual machine's
//! instruction set into a typed, queryable artifact for the rest of a
//! bytecode toolchain (assembler, disassembler, interpreter): a stable
//! opcode enumeration plus bidirectional name/code lookup tables.
//!
//! # Quick Start
//!
//! ```
//! use opset::{compile, CppHeaderEmitter};
//!
//! let source = r#"{
//!     "instructions": [
//!         {"name": "HALT", "comments": ["Stops the execution"], "args": []},
//!         {"name": "LOAD", "args": ["REGISTER", "LITERAL"]}
//!     ]
//! }"#;
//!
//! let compilation = compile(source).unwrap();
//! assert_eq!(compilation.tables.info("LOAD").unwrap().code, 1);
//!
//! let header = compilation.render(&CppHeaderEmitter);
//! assert!(header.contains("HALT = 0x00,"));
//! ```
//!
//! # In-process use
//!
//! Embedding toolchains can skip rendering entirely and query
//! [`Compilation::tables`] directly: `info(name)` for the encode direction
//! and `name(code)` for the decode direction.

pub use opset_core::{
    compile, compile_path, write_artifact, Artifact, ArgumentKind, Compilation,
    CppHeaderEmitter, Emitter, Error, InstructionSetDescriptor, InstructionSpec,
    LookupTables, OpcodeAssignment, OpcodeInfo, Result, RustModuleEmitter,
};

/// Compiles a specification document and renders it in one call.
pub fn compile_to_string(source: &str, emitter: &dyn Emitter) -> Result<String> {
    Ok(compile(source)?.render(emitter))
}
