//! Schema loader: parses and validates a raw specification document into an
//! in-memory [`InstructionSetDescriptor`].
//!
//! Loading is a pure transformation. Validation runs in a fixed order —
//! structural validity, then argument-kind membership, then name uniqueness —
//! and the first violation short-circuits with enough context to locate the
//! offending record. Invalid records are never dropped or coerced.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Operand category of a single instruction argument.
///
/// Closed set: the loader rejects any token outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Register,
    Literal,
    Address,
}

impl ArgumentKind {
    /// All kinds, in their canonical declaration order.
    pub const ALL: [ArgumentKind; 3] = [
        ArgumentKind::Register,
        ArgumentKind::Literal,
        ArgumentKind::Address,
    ];

    /// The token spelling used in specification documents and emitted
    /// artifacts.
    pub fn token(self) -> &'static str {
        match self {
            ArgumentKind::Register => "REGISTER",
            ArgumentKind::Literal => "LITERAL",
            ArgumentKind::Address => "ADDRESS",
        }
    }

    /// Parses a specification token. Tokens are case-sensitive.
    pub fn from_token(token: &str) -> Option<ArgumentKind> {
        match token {
            "REGISTER" => Some(ArgumentKind::Register),
            "LITERAL" => Some(ArgumentKind::Literal),
            "ADDRESS" => Some(ArgumentKind::Address),
            _ => None,
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One validated instruction definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSpec {
    /// Mnemonic name, unique across the descriptor.
    pub name: String,
    /// Documentation lines, no semantic effect.
    pub comments: Vec<String>,
    /// Positional operand kinds; order is the operand order.
    pub args: Vec<ArgumentKind>,
}

/// The validated, ordered, in-memory model of the full instruction set.
///
/// Order is load-bearing: the position of an instruction in this sequence
/// determines its assigned opcode. The descriptor is immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSetDescriptor {
    instructions: Vec<InstructionSpec>,
}

impl InstructionSetDescriptor {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InstructionSpec> {
        self.instructions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstructionSpec> {
        self.instructions.iter()
    }

    pub fn instructions(&self) -> &[InstructionSpec] {
        &self.instructions
    }
}

/// Raw document shape, prior to validation.
///
/// `bytecode` is the top-level key the original toolchain's documents use;
/// it is accepted as an alias of `instructions`.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(alias = "bytecode")]
    instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    name: String,
    #[serde(default)]
    comments: Vec<String>,
    args: Vec<String>,
}

/// Loads and validates a JSON specification document.
pub fn load_str(source: &str) -> Result<InstructionSetDescriptor> {
    let raw: RawDocument =
        serde_json::from_str(source).map_err(|err| Error::MalformedSource {
            detail: err.to_string(),
        })?;

    // Structural validity beyond what serde enforces.
    for (index, record) in raw.instructions.iter().enumerate() {
        if record.name.is_empty() {
            return Err(Error::MalformedSource {
                detail: format!("instruction record {index} has an empty name"),
            });
        }
    }

    // Argument-kind membership.
    let mut instructions = Vec::with_capacity(raw.instructions.len());
    for record in raw.instructions {
        let mut args = Vec::with_capacity(record.args.len());
        for token in &record.args {
            let kind = ArgumentKind::from_token(token).ok_or_else(|| {
                Error::UnknownArgumentKind {
                    token: token.clone(),
                    instruction: record.name.clone(),
                }
            })?;
            args.push(kind);
        }
        instructions.push(InstructionSpec {
            name: record.name,
            comments: record.comments,
            args,
        });
    }

    // Name uniqueness across the whole set.
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, spec) in instructions.iter().enumerate() {
        if let Some(&first) = seen.get(spec.name.as_str()) {
            return Err(Error::DuplicateInstructionName {
                name: spec.name.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&spec.name, index);
    }

    tracing::debug!(count = instructions.len(), "loaded instruction set descriptor");
    Ok(InstructionSetDescriptor { instructions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_records_in_document_order() {
        let descriptor = load_str(indoc! {r#"
            {
                "instructions": [
                    {"name": "HALT", "comments": ["Stops the execution"], "args": []},
                    {"name": "JUMP", "args": ["ADDRESS"]},
                    {"name": "MOVELR", "args": ["LITERAL", "REGISTER"]}
                ]
            }
        "#})
        .unwrap();

        let names: Vec<&str> =
            descriptor.iter().map(|spec| spec.name.as_str()).collect();
        assert_eq!(names, ["HALT", "JUMP", "MOVELR"]);
        assert_eq!(
            descriptor.get(2).unwrap().args,
            [ArgumentKind::Literal, ArgumentKind::Register]
        );
    }

    #[test]
    fn accepts_legacy_bytecode_key() {
        let descriptor = load_str(
            r#"{"bytecode": [{"name": "HALT", "args": []}]}"#,
        )
        .unwrap();
        assert_eq!(descriptor.len(), 1);
        assert!(descriptor.get(0).unwrap().comments.is_empty());
    }

    #[test]
    fn rejects_unparseable_document() {
        let err = load_str("not json").unwrap_err();
        assert!(matches!(err, crate::Error::MalformedSource { .. }));
    }

    #[test]
    fn rejects_record_missing_args() {
        let err = load_str(r#"{"instructions": [{"name": "HALT"}]}"#).unwrap_err();
        assert!(matches!(err, crate::Error::MalformedSource { .. }));
    }

    #[test]
    fn rejects_empty_name() {
        let err =
            load_str(r#"{"instructions": [{"name": "", "args": []}]}"#).unwrap_err();
        match err {
            crate::Error::MalformedSource { detail } => {
                assert!(detail.contains("record 0"), "detail: {detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_argument_kind() {
        let err = load_str(indoc! {r#"
            {
                "instructions": [
                    {"name": "HALT", "args": []},
                    {"name": "JUMP", "args": ["LABEL"]}
                ]
            }
        "#})
        .unwrap_err();
        match err {
            crate::Error::UnknownArgumentKind { token, instruction } => {
                assert_eq!(token, "LABEL");
                assert_eq!(instruction, "JUMP");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_name_with_both_indices() {
        let err = load_str(indoc! {r#"
            {
                "instructions": [
                    {"name": "ADD", "args": ["REGISTER", "REGISTER", "REGISTER"]},
                    {"name": "SUBTRACT", "args": ["REGISTER", "REGISTER", "REGISTER"]},
                    {"name": "ADD", "args": ["REGISTER"]}
                ]
            }
        "#})
        .unwrap_err();
        match err {
            crate::Error::DuplicateInstructionName { name, first, second } => {
                assert_eq!(name, "ADD");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn argument_kind_tokens_round_trip() {
        for kind in ArgumentKind::ALL {
            assert_eq!(ArgumentKind::from_token(kind.token()), Some(kind));
        }
        assert_eq!(ArgumentKind::from_token("register"), None);
    }
}
