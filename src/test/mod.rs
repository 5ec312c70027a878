//! Shared fixture factories for unit tests.
//!
//! Builds decoded records by hand, the way a format engine would emit them, so every
//! scan can be exercised without a real sample on disk.

use crate::format::{
    instruction::{FieldRef, Instruction, MethodRef, Opcode, Operand},
    records::{RawField, RawMethod, RawType},
};

/// A public class in `namespace` with no members yet
pub fn type_def(name: &str, namespace: &str) -> RawType {
    RawType {
        name: name.to_string(),
        namespace: namespace.to_string(),
        flags: 0x0001, // public
        base_type: Some("System.Object".to_string()),
        fields: Vec::new(),
        methods: Vec::new(),
    }
}

/// A public instance field with no constant
pub fn field(name: &str, field_type: &str) -> RawField {
    RawField {
        name: name.to_string(),
        field_type: field_type.to_string(),
        flags: 0x0006, // public
        constant: None,
    }
}

/// A public static field with no constant
pub fn static_field(name: &str, field_type: &str) -> RawField {
    let mut f = field(name, field_type);
    f.flags |= 0x0010; // static
    f
}

/// Instructions from `(opcode, operand)` pairs, with synthetic ascending offsets
pub fn body(ops: &[(Opcode, Operand)]) -> Vec<Instruction> {
    ops.iter()
        .enumerate()
        .map(|(i, (opcode, operand))| Instruction::new(i as u32 * 2, *opcode, operand.clone()))
        .collect()
}

/// A public method named `name` with the given body
pub fn method(name: &str, ops: &[(Opcode, Operand)]) -> RawMethod {
    RawMethod {
        name: name.to_string(),
        flags: 0x0006, // public
        return_type: "System.Void".to_string(),
        params: Vec::new(),
        body: body(ops),
    }
}

/// A static initializer with the given body
pub fn cctor(body: Vec<Instruction>) -> RawMethod {
    RawMethod {
        name: ".cctor".to_string(),
        flags: 0x1811, // private | static | specialname | rtspecialname
        return_type: "System.Void".to_string(),
        params: Vec::new(),
        body,
    }
}

/// `ldstr "value"`
pub fn ldstr(offset: u32, value: &str) -> Instruction {
    Instruction::new(offset, Opcode::Ldstr, Operand::String(value.to_string()))
}

/// `stsfld parent::name`
pub fn stsfld(offset: u32, parent: &str, name: &str) -> Instruction {
    Instruction::new(
        offset,
        Opcode::Stsfld,
        Operand::Field(FieldRef {
            parent: parent.to_string(),
            name: name.to_string(),
        }),
    )
}

/// `call parent::name`
pub fn call(offset: u32, parent: &str, name: &str) -> Instruction {
    Instruction::new(
        offset,
        Opcode::Call,
        Operand::Method(MethodRef {
            parent: parent.to_string(),
            name: name.to_string(),
        }),
    )
}

/// `brfalse.s target`
pub fn brfalse_s(offset: u32, target: u32) -> Instruction {
    Instruction::new(offset, Opcode::BrfalseS, Operand::Target(target))
}

/// `ret`
pub fn ret(offset: u32) -> Instruction {
    Instruction::new(offset, Opcode::Ret, Operand::None)
}
