//! C++ header emitter.
//!
//! Renders the artifact in the form the original bytecode toolchain
//! consumes: an include-guarded header declaring the `BYTECODE` enum, the
//! `ARGUMENT_TYPE` enum, the `BYTECODE_OBJECT` record, and the two lookup
//! maps inside the `BYTECODE_INFO` namespace. Consumer-facing identifiers
//! are kept verbatim so existing assembler/disassembler code keeps
//! compiling against the regenerated header.
//!
//! Every enum symbol carries an explicit hex value, so opcode backing
//! values are visible and stable in the generated source itself.

use std::fmt::Write;

use super::{Artifact, Emitter};
use crate::schema::ArgumentKind;

pub struct CppHeaderEmitter;

impl Emitter for CppHeaderEmitter {
    fn target(&self) -> &'static str {
        "cpp"
    }

    fn render(&self, artifact: &Artifact) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail; discard the fmt::Result plumbing.
        let _ = render(&mut out, artifact);
        out
    }
}

fn render(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "#ifndef BYTECODE_H")?;
    writeln!(out, "#define BYTECODE_H")?;
    writeln!(out)?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    writeln!(out, "#include <string>")?;
    writeln!(out, "#include <unordered_map>")?;
    writeln!(out, "#include <vector>")?;
    writeln!(out)?;

    render_bytecode_enum(out, artifact)?;
    writeln!(out)?;
    render_info_namespace(out, artifact)?;
    writeln!(out)?;
    writeln!(out, "#endif")?;
    Ok(())
}

fn render_bytecode_enum(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "enum class BYTECODE : uint8_t {{")?;
    for (position, row) in artifact.rows().iter().enumerate() {
        if position > 0 {
            writeln!(out)?;
        }
        for comment in &row.comments {
            writeln!(out, "\t// {comment}")?;
        }
        writeln!(out, "\t{} = {:#04x},", row.name, row.code)?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

fn render_info_namespace(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    writeln!(out, "namespace BYTECODE_INFO {{")?;

    writeln!(out, "\tenum class ARGUMENT_TYPE : uint8_t")?;
    writeln!(out, "\t{{")?;
    for kind in ArgumentKind::ALL {
        writeln!(out, "\t\t{},", kind.token())?;
    }
    writeln!(out, "\t}};")?;
    writeln!(out)?;

    writeln!(out, "\tstruct BYTECODE_OBJECT")?;
    writeln!(out, "\t{{")?;
    writeln!(out, "\t\tBYTECODE bytecode;")?;
    writeln!(out, "\t\tstd::string name;")?;
    writeln!(out, "\t\tstd::vector<ARGUMENT_TYPE> args;")?;
    writeln!(out, "\t}};")?;
    writeln!(out)?;

    // Forward table: name -> full record.
    writeln!(
        out,
        "\tconst std::unordered_map<std::string, BYTECODE_OBJECT> OBJECT_FROM_NAME_MAP = {{"
    )?;
    for row in artifact.rows() {
        let args = row
            .args
            .iter()
            .map(|kind| format!("ARGUMENT_TYPE::{}", kind.token()))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "\t\t{{\"{name}\", {{BYTECODE::{name}, \"{name}\", {{{args}}}}}}},",
            name = row.name,
        )?;
    }
    writeln!(out, "\t}};")?;
    writeln!(out)?;

    // Reverse table: value -> name.
    writeln!(
        out,
        "\tconst std::unordered_map<BYTECODE, std::string> NAME_FROM_VALUE_MAP = {{"
    )?;
    for row in artifact.rows() {
        writeln!(out, "\t\t{{BYTECODE::{name}, \"{name}\"}},", name = row.name)?;
    }
    writeln!(out, "\t}};")?;

    writeln!(out, "}}")?;
    Ok(())
}
