//! Assembly-wide instruction iteration.
//!
//! [`InstructionWalker`] flattens the nested decoded view (types → methods →
//! instructions) into one lazy sequence of [`InstructionSite`]s. Order is exactly the
//! declaration order of the view at every level; no sorting, no parallelism, and the
//! sequence is finite and restartable. The patcher and the string harvester both run
//! over this walker so they see identical ordering semantics.

use crate::{
    format::{instruction::Instruction, records::RawType},
    metadata::Method,
};

/// Index-based address of one instruction within the decoded view.
///
/// Used by the sole mutation entry point
/// ([`crate::metadata::Assembly::replace_opcode`]) to address a located pattern
/// without holding a borrow into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the declaring type within the assembly
    pub type_index: usize,
    /// Index of the method within its type
    pub method_index: usize,
    /// Index of the instruction within its method body
    pub instruction_index: usize,
}

impl Location {
    /// Whether `other` addresses the same method body as `self`
    #[must_use]
    pub fn same_method(&self, other: &Location) -> bool {
        self.type_index == other.type_index && self.method_index == other.method_index
    }
}

/// One element of the flattened sequence: an instruction paired with its owning
/// method and its address.
pub struct InstructionSite<'a> {
    /// The method owning this instruction
    pub method: Method<'a>,
    /// The instruction itself
    pub instruction: &'a Instruction,
    /// Where the instruction sits in the decoded view
    pub location: Location,
}

/// Lazy cursor over every instruction in every method body of an assembly.
///
/// Construct through [`crate::metadata::Assembly::instructions`]; each call hands out
/// a fresh cursor, so two traversals never share state.
pub struct InstructionWalker<'a> {
    types: &'a [RawType],
    type_index: usize,
    method_index: usize,
    instruction_index: usize,
}

impl<'a> InstructionWalker<'a> {
    pub(crate) fn new(types: &'a [RawType]) -> Self {
        InstructionWalker {
            types,
            type_index: 0,
            method_index: 0,
            instruction_index: 0,
        }
    }
}

impl<'a> Iterator for InstructionWalker<'a> {
    type Item = InstructionSite<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ty = self.types.get(self.type_index)?;

            let Some(raw_method) = ty.methods.get(self.method_index) else {
                self.type_index += 1;
                self.method_index = 0;
                self.instruction_index = 0;
                continue;
            };

            let Some(instruction) = raw_method.body.get(self.instruction_index) else {
                self.method_index += 1;
                self.instruction_index = 0;
                continue;
            };

            let location = Location {
                type_index: self.type_index,
                method_index: self.method_index,
                instruction_index: self.instruction_index,
            };
            self.instruction_index += 1;

            return Some(InstructionSite {
                method: Method::new(raw_method),
                instruction,
                location,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        format::{
            instruction::{Opcode, Operand},
            records::RawAssembly,
        },
        metadata::Assembly,
        test::{method, type_def},
    };

    fn fixture() -> Assembly {
        let mut a = type_def("A", "");
        a.methods.push(method(
            "First",
            &[
                (Opcode::Ldstr, Operand::String("one".into())),
                (Opcode::Ret, Operand::None),
            ],
        ));
        a.methods.push(method("Empty", &[]));
        a.methods
            .push(method("Second", &[(Opcode::Ret, Operand::None)]));

        let mut b = type_def("B", "");
        b.methods
            .push(method("Third", &[(Opcode::Nop, Operand::None)]));

        Assembly::from_raw(RawAssembly {
            name: "fixture".into(),
            types: vec![a, b],
            resources: Vec::new(),
        })
    }

    #[test]
    fn yields_every_instruction_in_declaration_order() {
        let assembly = fixture();
        let trace: Vec<(String, Opcode)> = assembly
            .instructions()
            .map(|s| (s.method.name().to_string(), s.instruction.opcode))
            .collect();

        assert_eq!(
            trace,
            vec![
                ("First".to_string(), Opcode::Ldstr),
                ("First".to_string(), Opcode::Ret),
                ("Second".to_string(), Opcode::Ret),
                ("Third".to_string(), Opcode::Nop),
            ]
        );
    }

    #[test]
    fn two_traversals_are_identical() {
        let assembly = fixture();
        let first: Vec<Location> = assembly.instructions().map(|s| s.location).collect();
        let second: Vec<Location> = assembly.instructions().map(|s| s.location).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_assembly_yields_nothing() {
        let assembly = Assembly::from_raw(RawAssembly {
            name: "empty".into(),
            types: Vec::new(),
            resources: Vec::new(),
        });
        assert_eq!(assembly.instructions().count(), 0);
    }

    #[test]
    fn locations_address_the_view() {
        let assembly = fixture();
        for site in assembly.instructions() {
            let raw = assembly.raw();
            let direct = &raw.types[site.location.type_index].methods
                [site.location.method_index]
                .body[site.location.instruction_index];
            assert_eq!(direct, site.instruction);
        }
    }

    #[test]
    fn same_method_comparison() {
        let a = Location {
            type_index: 0,
            method_index: 1,
            instruction_index: 4,
        };
        let b = Location {
            type_index: 0,
            method_index: 1,
            instruction_index: 5,
        };
        let c = Location {
            type_index: 1,
            method_index: 1,
            instruction_index: 5,
        };
        assert!(a.same_method(&b));
        assert!(!a.same_method(&c));
    }
}
