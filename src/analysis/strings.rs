//! Bulk extraction of string literals.
//!
//! Filters the assembly-wide walker for `ldstr` and projects the operand. Order is
//! the walker's deterministic order; duplicates are preserved, since repeated
//! literals are themselves a signal when triaging a sample.

use crate::{
    format::instruction::{Opcode, Operand},
    metadata::Assembly,
};

/// Every string literal loaded anywhere in the assembly, lazily, in traversal order.
pub fn harvest(assembly: &Assembly) -> impl Iterator<Item = &str> {
    assembly.instructions().filter_map(|site| {
        match (&site.instruction.opcode, &site.instruction.operand) {
            (Opcode::Ldstr, Operand::String(value)) => Some(value.as_str()),
            _ => None,
        }
    })
}
