//! Opcode assigner: a total, order-preserving, zero-based, gapless numbering
//! of a validated descriptor.
//!
//! The policy is a direct enumeration of positions: the instruction at
//! position `i` receives code `i`. Opcode stability across regenerations
//! therefore rests entirely on the specification's ordering staying stable —
//! reordering the source changes opcode values, which is the documented
//! contract with the specification's authors.

use crate::schema::{InstructionSetDescriptor, InstructionSpec};

/// The numeric code assigned to each instruction, by descriptor position.
///
/// Codes are dense and gapless over `[0, N)`. Uniqueness holds by
/// construction; there is no runtime check and no failure mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeAssignment {
    codes: Vec<u32>,
}

impl OpcodeAssignment {
    /// The code of the instruction at `position`, if in range.
    pub fn code_at(&self, position: usize) -> Option<u32> {
        self.codes.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates the assigned codes in descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codes.iter().copied()
    }

    /// Pairs each instruction with its code, in descriptor order.
    pub fn zip<'a>(
        &'a self,
        descriptor: &'a InstructionSetDescriptor,
    ) -> impl Iterator<Item = (u32, &'a InstructionSpec)> {
        self.iter().zip(descriptor.iter())
    }
}

/// Assigns code `i` to the instruction at position `i`.
pub fn assign(descriptor: &InstructionSetDescriptor) -> OpcodeAssignment {
    OpcodeAssignment {
        codes: (0..descriptor.len() as u32).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::load_str;
    use pretty_assertions::assert_eq;

    fn descriptor(names: &[&str]) -> InstructionSetDescriptor {
        let records: Vec<String> = names
            .iter()
            .map(|name| format!(r#"{{"name": "{name}", "args": []}}"#))
            .collect();
        load_str(&format!(r#"{{"instructions": [{}]}}"#, records.join(",")))
            .unwrap()
    }

    #[test]
    fn codes_are_dense_and_zero_based() {
        let descriptor = descriptor(&["HALT", "COMPARE", "JUMP", "ADD"]);
        let assignment = assign(&descriptor);
        assert_eq!(assignment.iter().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(assignment.code_at(0), Some(0));
        assert_eq!(assignment.code_at(4), None);
    }

    #[test]
    fn first_instruction_is_always_zero() {
        let assignment = assign(&descriptor(&["MOVELR"]));
        assert_eq!(assignment.code_at(0), Some(0));
    }

    #[test]
    fn reordering_the_source_reorders_codes() {
        let forward = assign(&descriptor(&["LOAD", "ADD"]));
        let reversed = descriptor(&["ADD", "LOAD"]);
        let reversed_assignment = assign(&reversed);

        // Position decides the code, not the name.
        assert_eq!(forward.code_at(1), Some(1));
        assert_eq!(reversed.get(0).unwrap().name, "ADD");
        assert_eq!(reversed_assignment.code_at(0), Some(0));
    }

    #[test]
    fn empty_descriptor_assigns_nothing() {
        let assignment = assign(&descriptor(&[]));
        assert!(assignment.is_empty());
    }
}
