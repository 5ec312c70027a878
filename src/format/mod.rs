//! Boundary to the external binary format engine.
//!
//! Parsing the PE container, decoding metadata tables, and decoding raw bytes into
//! typed instructions all happen outside this crate, in a decoder that implements
//! [`FormatEngine`]. What crosses the boundary is the decoded view in
//! [`records`]: assembly → types → (fields, methods, resources), method → ordered
//! instruction sequence. Re-encoding a patched view back to disk is equally the
//! engine's job.
//!
//! # Key Types
//! - [`FormatEngine`] - Load/save contract every decoder backend implements
//! - [`JsonEngine`] - The bundled backend over the serialized decoded view
//! - [`records`] - The decoded record types themselves
//! - [`instruction`] - Decoded instructions, opcodes and operands
//!
//! # Backend selection
//!
//! [`engine_for`] picks a backend from the input path. Raw managed binaries
//! (`.dll`, `.exe`) need the native decoder backend, which is distributed
//! separately; when it is absent that is [`crate::Error::MissingDependency`],
//! the one fatal startup condition this system knows.

pub mod instruction;
pub mod records;

mod json;

use std::path::Path;

pub use json::JsonEngine;

use crate::{
    format::{
        instruction::{Opcode, Operand},
        records::RawAssembly,
    },
    Error, Result,
};

/// Name of the out-of-tree native decoder backend for raw managed binaries
pub const NATIVE_BACKEND: &str = "dotnet-decoder";

/// Contract between this crate and a binary format engine.
///
/// An engine owns everything byte-level: container parsing, table decoding,
/// instruction decoding, and re-serialization of a (possibly patched) view.
pub trait FormatEngine {
    /// Decode the file at `path` into the raw assembly view
    fn load(&self, path: &Path) -> Result<RawAssembly>;

    /// Re-encode `assembly` to `path`
    fn save(&self, assembly: &RawAssembly, path: &Path) -> Result<()>;
}

/// Select the format engine responsible for `path`.
///
/// `.json` views go to the bundled [`JsonEngine`]. Raw managed binaries require the
/// native decoder backend and fail with [`Error::MissingDependency`] until one is
/// installed. Anything else is [`Error::NotSupported`].
pub fn engine_for(path: &Path) -> Result<Box<dyn FormatEngine>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonEngine)),
        Some("dll" | "exe") => Err(Error::MissingDependency {
            backend: NATIVE_BACKEND.to_string(),
        }),
        _ => Err(Error::NotSupported),
    }
}

/// Structural validation of a decoded view.
///
/// The engine already guarantees shape; this checks the opcode/operand pairing the
/// scans rely on, so a malformed view fails at the boundary instead of mid-scan.
pub fn validate(assembly: &RawAssembly) -> Result<()> {
    for ty in &assembly.types {
        for method in &ty.methods {
            for inst in &method.body {
                let ok = match inst.opcode {
                    Opcode::Ldstr => matches!(inst.operand, Operand::String(_)),
                    Opcode::Ldsfld | Opcode::Stsfld | Opcode::Ldfld | Opcode::Stfld => {
                        matches!(inst.operand, Operand::Field(_))
                    }
                    Opcode::Call | Opcode::Callvirt | Opcode::Newobj => {
                        matches!(inst.operand, Operand::Method(_))
                    }
                    Opcode::Br
                    | Opcode::BrS
                    | Opcode::Brtrue
                    | Opcode::BrtrueS
                    | Opcode::Brfalse
                    | Opcode::BrfalseS => matches!(inst.operand, Operand::Target(_)),
                    Opcode::LdcI4 => matches!(inst.operand, Operand::Int(_)),
                    _ => matches!(inst.operand, Operand::None),
                };

                if !ok {
                    return Err(malformed_error!(
                        "operand mismatch for '{}' at IL_{:04x} in {}.{}::{}",
                        inst.opcode,
                        inst.offset,
                        ty.namespace,
                        ty.name,
                        method.name
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{
        instruction::Instruction,
        records::{RawMethod, RawType},
    };

    #[test]
    fn engine_selection_by_extension() {
        assert!(engine_for(Path::new("view.json")).is_ok());
        assert!(engine_for(Path::new("VIEW.JSON")).is_ok());
        assert!(matches!(
            engine_for(Path::new("sample.dll")),
            Err(Error::MissingDependency { .. })
        ));
        assert!(matches!(
            engine_for(Path::new("sample.exe")),
            Err(Error::MissingDependency { .. })
        ));
        assert!(matches!(
            engine_for(Path::new("notes.txt")),
            Err(Error::NotSupported)
        ));
        assert!(matches!(engine_for(Path::new("no_ext")), Err(Error::NotSupported)));
    }

    #[test]
    fn validate_flags_operand_mismatch() {
        let raw = RawAssembly {
            name: "bad".into(),
            types: vec![RawType {
                name: "T".into(),
                namespace: String::new(),
                flags: 0,
                base_type: None,
                fields: Vec::new(),
                methods: vec![RawMethod {
                    name: "M".into(),
                    flags: 0,
                    return_type: "System.Void".into(),
                    params: Vec::new(),
                    body: vec![Instruction::new(0, Opcode::Ldstr, Operand::Int(3))],
                }],
            }],
            resources: Vec::new(),
        };

        assert!(matches!(validate(&raw), Err(Error::Malformed { .. })));
    }
}
