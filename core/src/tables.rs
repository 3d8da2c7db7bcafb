//! Lookup table builder: the two reverse-index structures consumers use for
//! encoding and decoding.
//!
//! Both tables come out of one pass over the assigned sequence, so the
//! mutual-consistency invariant (`by_code[by_name[n].code] == n`) holds by
//! construction. Uniqueness was already guaranteed by the loader; nothing is
//! revalidated here.

use std::collections::HashMap;

use crate::opcode::OpcodeAssignment;
use crate::schema::{ArgumentKind, InstructionSetDescriptor};

/// The full record behind a mnemonic: its code, name and operand shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub code: u32,
    pub name: String,
    pub args: Vec<ArgumentKind>,
}

/// Bidirectional lookup between mnemonic names and opcode values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTables {
    by_name: HashMap<String, OpcodeInfo>,
    by_code: HashMap<u32, String>,
}

impl LookupTables {
    /// Encode-direction lookup (assembler use): full record by mnemonic.
    pub fn info(&self, name: &str) -> Option<&OpcodeInfo> {
        self.by_name.get(name)
    }

    /// Decode-direction lookup (disassembler use): mnemonic by code.
    pub fn name(&self, code: u32) -> Option<&str> {
        self.by_code.get(&code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Builds both tables in a single pass over the assigned sequence.
pub fn build(
    descriptor: &InstructionSetDescriptor,
    assignment: &OpcodeAssignment,
) -> LookupTables {
    let mut by_name = HashMap::with_capacity(descriptor.len());
    let mut by_code = HashMap::with_capacity(descriptor.len());

    for (code, spec) in assignment.zip(descriptor) {
        by_name.insert(
            spec.name.clone(),
            OpcodeInfo {
                code,
                name: spec.name.clone(),
                args: spec.args.clone(),
            },
        );
        by_code.insert(code, spec.name.clone());
    }

    tracing::debug!(entries = by_name.len(), "built lookup tables");
    LookupTables { by_name, by_code }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{opcode, schema};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn tables() -> (InstructionSetDescriptor, LookupTables) {
        let descriptor = schema::load_str(indoc! {r#"
            {
                "instructions": [
                    {"name": "LOAD", "args": ["REGISTER", "LITERAL"]},
                    {"name": "ADD", "args": ["REGISTER", "REGISTER", "REGISTER"]},
                    {"name": "HALT", "args": []}
                ]
            }
        "#})
        .unwrap();
        let assignment = opcode::assign(&descriptor);
        let tables = build(&descriptor, &assignment);
        (descriptor, tables)
    }

    #[test]
    fn forward_table_holds_the_full_record() {
        let (_, tables) = tables();
        let info = tables.info("ADD").unwrap();
        assert_eq!(info.code, 1);
        assert_eq!(info.name, "ADD");
        assert_eq!(
            info.args,
            [
                ArgumentKind::Register,
                ArgumentKind::Register,
                ArgumentKind::Register
            ]
        );
    }

    #[test]
    fn reverse_table_yields_the_mnemonic() {
        let (_, tables) = tables();
        assert_eq!(tables.name(0), Some("LOAD"));
        assert_eq!(tables.name(2), Some("HALT"));
        assert_eq!(tables.name(3), None);
    }

    #[test]
    fn tables_are_mutually_consistent() {
        let (descriptor, tables) = tables();
        assert_eq!(tables.len(), descriptor.len());
        for spec in descriptor.iter() {
            let info = tables.info(&spec.name).unwrap();
            assert_eq!(tables.name(info.code), Some(spec.name.as_str()));
        }
    }

    #[test]
    fn unknown_name_misses() {
        let (_, tables) = tables();
        assert_eq!(tables.info("NOP"), None);
    }
}
