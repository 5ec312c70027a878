//! Decoded CIL instructions as handed over by the binary format engine.
//!
//! One [`Instruction`] is one bytecode operation: an [`Opcode`] selecting the operation
//! and an [`Operand`] supplying its argument (literal, member reference, branch target,
//! or nothing). The decoder produces these in stream order; this crate never reorders
//! them and mutates nothing except an opcode slot through the patcher's single entry
//! point ([`crate::metadata::Assembly::replace_opcode`]).
//!
//! # Key Types
//! - [`Instruction`] - One decoded bytecode operation
//! - [`Opcode`] - The operation selector, with branch-inversion helpers
//! - [`Operand`] - The opcode-dependent argument
//! - [`FieldRef`], [`MethodRef`] - Member references carried by access/call operands

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// The subset of CIL opcodes the decoder emits for the scans in this crate.
///
/// Mnemonics follow ECMA-335 §III; `Display` renders them in their IL spelling
/// (`brfalse.s`, `ldc.i4`, ...).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    /// No operation
    #[strum(serialize = "nop")]
    Nop,
    /// Push a null reference
    #[strum(serialize = "ldnull")]
    Ldnull,
    /// Push a 32-bit integer constant
    #[strum(serialize = "ldc.i4")]
    LdcI4,
    /// Push a string literal from the user-string heap
    #[strum(serialize = "ldstr")]
    Ldstr,
    /// Push the value of a static field
    #[strum(serialize = "ldsfld")]
    Ldsfld,
    /// Pop a value and store it into a static field
    #[strum(serialize = "stsfld")]
    Stsfld,
    /// Push the value of an instance field
    #[strum(serialize = "ldfld")]
    Ldfld,
    /// Pop a value and store it into an instance field
    #[strum(serialize = "stfld")]
    Stfld,
    /// Call a method
    #[strum(serialize = "call")]
    Call,
    /// Call a method with virtual dispatch
    #[strum(serialize = "callvirt")]
    Callvirt,
    /// Allocate an object and call its constructor
    #[strum(serialize = "newobj")]
    Newobj,
    /// Duplicate the top of the stack
    #[strum(serialize = "dup")]
    Dup,
    /// Discard the top of the stack
    #[strum(serialize = "pop")]
    Pop,
    /// Unconditional branch
    #[strum(serialize = "br")]
    Br,
    /// Unconditional branch, short form
    #[strum(serialize = "br.s")]
    BrS,
    /// Branch if the popped value is true (non-zero)
    #[strum(serialize = "brtrue")]
    Brtrue,
    /// Branch if the popped value is true, short form
    #[strum(serialize = "brtrue.s")]
    BrtrueS,
    /// Branch if the popped value is false (zero or null)
    #[strum(serialize = "brfalse")]
    Brfalse,
    /// Branch if the popped value is false, short form
    #[strum(serialize = "brfalse.s")]
    BrfalseS,
    /// Return from the current method
    #[strum(serialize = "ret")]
    Ret,
}

impl Opcode {
    /// Whether this opcode is a conditional branch on a boolean condition
    #[must_use]
    pub fn is_conditional_branch(&self) -> bool {
        matches!(
            self,
            Opcode::Brtrue | Opcode::BrtrueS | Opcode::Brfalse | Opcode::BrfalseS
        )
    }

    /// The logical complement of a boolean conditional branch.
    ///
    /// Long forms map to long forms and short forms to short forms, so the
    /// encoded operand width stays valid. Returns `None` for every opcode
    /// that is not a boolean conditional branch.
    #[must_use]
    pub fn invert(&self) -> Option<Opcode> {
        match self {
            Opcode::Brtrue => Some(Opcode::Brfalse),
            Opcode::BrtrueS => Some(Opcode::BrfalseS),
            Opcode::Brfalse => Some(Opcode::Brtrue),
            Opcode::BrfalseS => Some(Opcode::BrtrueS),
            _ => None,
        }
    }
}

/// A reference to a field, carried by field access opcodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    /// Full name of the declaring type
    pub parent: String,
    /// Field name
    pub name: String,
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.parent, self.name)
    }
}

/// A reference to a method, carried by call opcodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Full name of the declaring type
    pub parent: String,
    /// Method name
    pub name: String,
}

impl MethodRef {
    /// The fully qualified `Type::Method` name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.parent, self.name)
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.parent, self.name)
    }
}

/// The opcode-dependent argument of an instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// The opcode takes no argument
    None,
    /// A string literal (`ldstr`)
    String(String),
    /// A field reference (`ldsfld`, `stsfld`, `ldfld`, `stfld`)
    Field(FieldRef),
    /// A method reference (`call`, `callvirt`, `newobj`)
    Method(MethodRef),
    /// A branch target, as an instruction offset (`br*`)
    Target(u32),
    /// An integer immediate (`ldc.*`)
    Int(i64),
}

/// One decoded bytecode operation.
///
/// The operand and offset are fixed at decode time; the opcode slot is the only part
/// of the decoded view that is ever mutated, and only through the patcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Byte offset of this instruction within its method body
    pub offset: u32,
    /// The operation selector
    pub opcode: Opcode,
    /// The opcode-dependent argument
    pub operand: Operand,
}

impl Instruction {
    /// Create an instruction from its decoded parts
    #[must_use]
    pub fn new(offset: u32, opcode: Opcode, operand: Operand) -> Self {
        Instruction {
            offset,
            opcode,
            operand,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IL_{:04x}: {}", self.offset, self.opcode)?;
        match &self.operand {
            Operand::None => Ok(()),
            Operand::String(s) => write!(f, " \"{s}\""),
            Operand::Field(r) => write!(f, " {r}"),
            Operand::Method(r) => write!(f, " {r}"),
            Operand::Target(t) => write!(f, " IL_{t:04x}"),
            Operand::Int(v) => write!(f, " {v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_maps_boolean_branches_onto_their_complement() {
        assert_eq!(Opcode::Brtrue.invert(), Some(Opcode::Brfalse));
        assert_eq!(Opcode::Brfalse.invert(), Some(Opcode::Brtrue));
        assert_eq!(Opcode::BrtrueS.invert(), Some(Opcode::BrfalseS));
        assert_eq!(Opcode::BrfalseS.invert(), Some(Opcode::BrtrueS));
    }

    #[test]
    fn invert_rejects_everything_else() {
        assert_eq!(Opcode::Br.invert(), None);
        assert_eq!(Opcode::BrS.invert(), None);
        assert_eq!(Opcode::Call.invert(), None);
        assert_eq!(Opcode::Ret.invert(), None);
    }

    #[test]
    fn conditional_branch_classification() {
        assert!(Opcode::Brfalse.is_conditional_branch());
        assert!(Opcode::BrtrueS.is_conditional_branch());
        assert!(!Opcode::Br.is_conditional_branch());
        assert!(!Opcode::Stsfld.is_conditional_branch());
    }

    #[test]
    fn display_renders_il_spelling() {
        let inst = Instruction::new(
            0x1a,
            Opcode::Ldstr,
            Operand::String("secret".into()),
        );
        assert_eq!(inst.to_string(), "IL_001a: ldstr \"secret\"");
        assert_eq!(Opcode::BrfalseS.to_string(), "brfalse.s");
    }
}
