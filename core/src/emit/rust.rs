//! Rust module emitter.
//!
//! Renders the artifact as a standalone, dependency-free Rust source file:
//! an opcode enum with explicit discriminants, the operand-kind enum, and
//! forward/reverse lookups over a static table. Mnemonics and argument
//! tokens keep their specification spelling, so the generated module uses
//! upper-case variant names.

use std::fmt::Write;

use super::{Artifact, Emitter};
use crate::schema::ArgumentKind;

pub struct RustModuleEmitter;

impl Emitter for RustModuleEmitter {
    fn target(&self) -> &'static str {
        "rust"
    }

    fn render(&self, artifact: &Artifact) -> String {
        let mut out = String::new();
        let _ = render(&mut out, artifact);
        out
    }
}

fn render(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "// Generated instruction-set tables. Do not edit.")?;
    writeln!(out)?;
    writeln!(out, "#![allow(non_camel_case_types)]")?;
    writeln!(out)?;

    writeln!(out, "/// Operand category of a single instruction argument.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq)]")?;
    writeln!(out, "pub enum ArgumentKind {{")?;
    for kind in ArgumentKind::ALL {
        writeln!(out, "    {},", kind.token())?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    render_opcode_enum(out, artifact)?;
    writeln!(out)?;
    render_table(out, artifact)?;
    writeln!(out)?;
    render_lookups(out, artifact)?;
    Ok(())
}

fn render_opcode_enum(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "/// Instruction opcodes; values match the wire encoding.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq)]")?;
    // A zero-variant enum cannot carry an explicit representation.
    if !artifact.is_empty() {
        writeln!(out, "#[repr(u32)]")?;
    }
    writeln!(out, "pub enum Opcode {{")?;
    for row in artifact.rows() {
        for comment in &row.comments {
            writeln!(out, "    /// {comment}")?;
        }
        writeln!(out, "    {} = {},", row.name, row.code)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn render_table(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "/// Full record behind a mnemonic.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq)]")?;
    writeln!(out, "pub struct OpcodeInfo {{")?;
    writeln!(out, "    pub opcode: Opcode,")?;
    writeln!(out, "    pub name: &'static str,")?;
    writeln!(out, "    pub args: &'static [ArgumentKind],")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// All instructions, ordered by opcode value.")?;
    writeln!(out, "pub const OPCODES: &[OpcodeInfo] = &[")?;
    for row in artifact.rows() {
        let args = row
            .args
            .iter()
            .map(|kind| format!("ArgumentKind::{}", kind.token()))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "    OpcodeInfo {{ opcode: Opcode::{name}, name: \"{name}\", args: &[{args}] }},",
            name = row.name,
        )?;
    }
    writeln!(out, "];")?;
    Ok(())
}

fn render_lookups(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "/// Encode-direction lookup: mnemonic to full record.")?;
    writeln!(
        out,
        "pub fn opcode_from_name(name: &str) -> Option<&'static OpcodeInfo> {{"
    )?;
    writeln!(out, "    OPCODES.iter().find(|info| info.name == name)")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// Decode-direction lookup: opcode to mnemonic.")?;
    writeln!(out, "pub fn name_from_opcode(opcode: Opcode) -> &'static str {{")?;
    writeln!(out, "    match opcode {{")?;
    for row in artifact.rows() {
        writeln!(out, "        Opcode::{name} => \"{name}\",", name = row.name)?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}
