//! JSON interchange backend for the decoded assembly view.
//!
//! A native decoder runs once over the managed binary and serializes the decoded view;
//! this engine reads that serialization back and re-emits it after patching. It is the
//! one backend that ships with this crate, and the one the test fixtures go through.

use std::{fs, path::Path};

use crate::{
    format::{records::RawAssembly, FormatEngine},
    Result,
};

/// Format engine over the serialized decoded-view interchange format.
///
/// Load and save are plain serde round-trips; the structural validation shared by
/// all engines runs in [`crate::format::FormatEngine::load`]'s caller-facing path
/// via [`crate::format::validate`].
pub struct JsonEngine;

impl FormatEngine for JsonEngine {
    fn load(&self, path: &Path) -> Result<RawAssembly> {
        let data = fs::read_to_string(path)?;
        let raw: RawAssembly = serde_json::from_str(&data)?;
        crate::format::validate(&raw)?;
        Ok(raw)
    }

    fn save(&self, assembly: &RawAssembly, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(assembly)?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{
        instruction::{Instruction, Opcode, Operand},
        records::{RawMethod, RawType},
    };

    fn sample() -> RawAssembly {
        RawAssembly {
            name: "sample".into(),
            types: vec![RawType {
                name: "Config".into(),
                namespace: "App".into(),
                flags: 0x0001,
                base_type: Some("System.Object".into()),
                fields: Vec::new(),
                methods: vec![RawMethod {
                    name: ".cctor".into(),
                    flags: 0x1810,
                    return_type: "System.Void".into(),
                    params: Vec::new(),
                    body: vec![
                        Instruction::new(0, Opcode::Ldstr, Operand::String("abc".into())),
                        Instruction::new(5, Opcode::Ret, Operand::None),
                    ],
                }],
            }],
            resources: Vec::new(),
        }
    }

    #[test]
    fn round_trip_through_disk() {
        let path = std::env::temp_dir().join("malscope_json_roundtrip.json");
        let original = sample();

        JsonEngine.save(&original, &path).unwrap();
        let reloaded = JsonEngine.load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(original, reloaded);
    }

    #[test]
    fn load_rejects_garbage() {
        let path = std::env::temp_dir().join("malscope_json_garbage.json");
        fs::write(&path, "{ not json").unwrap();

        let result = JsonEngine.load(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = JsonEngine.load(Path::new("does_not_exist.json"));
        assert!(result.is_err());
    }
}
