//! Debugger-presence check neutralization.
//!
//! Obfuscated samples commonly guard their payload with
//! `call System.Diagnostics.Debugger::get_IsAttached` followed by a conditional
//! branch. This pass locates every such call site where the *next* instruction of
//! the same method is a boolean conditional branch, and inverts that branch's
//! opcode so the check takes the opposite path at run time. Operands and branch
//! targets are left untouched; persisting the change is the format engine's job
//! ([`crate::metadata::Assembly::save`]).
//!
//! The pass runs in two phases over the assembly-wide walker: locate all sites
//! first, then apply each through the model's single mutation entry point. A call
//! whose next instruction is not a matching branch is simply not a site; that is
//! not an error.

use crate::{
    analysis::walker::Location,
    format::instruction::{Opcode, Operand},
    metadata::Assembly,
};

/// Fully qualified name of the debugger-presence check this pass targets by default
pub const DEBUGGER_CHECK: &str = "System.Diagnostics.Debugger::get_IsAttached";

/// Invert the branch after every `Debugger::get_IsAttached` call in the assembly.
///
/// Returns the number of branches flipped. All call sites across the assembly are
/// patched in one pass.
pub fn neutralize_debug_checks(assembly: &mut Assembly) -> usize {
    neutralize_calls(assembly, DEBUGGER_CHECK)
}

/// Invert the branch after every call to `target` (a fully qualified
/// `Type::Method` name).
///
/// The semantic effect of the inversion is not verified beyond the opcode swap;
/// the caller is choosing to trust that the checked condition only gates the
/// anti-analysis path.
pub fn neutralize_calls(assembly: &mut Assembly, target: &str) -> usize {
    let mut patches: Vec<(Location, Opcode)> = Vec::new();
    let mut armed_at: Option<Location> = None;

    for site in assembly.instructions() {
        if let Some(call_site) = armed_at.take() {
            if call_site.same_method(&site.location) {
                if let Some(inverted) = site.instruction.opcode.invert() {
                    patches.push((site.location, inverted));
                }
            }
        }

        if site.instruction.opcode == Opcode::Call {
            if let Operand::Method(callee) = &site.instruction.operand {
                if callee.full_name() == target {
                    armed_at = Some(site.location);
                }
            }
        }
    }

    for (location, opcode) in &patches {
        assembly.replace_opcode(*location, *opcode);
    }

    if !patches.is_empty() {
        log::debug!("inverted {} branch(es) after calls to {target}", patches.len());
    }
    patches.len()
}
