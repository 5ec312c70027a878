//! Fixture assembly shared by the integration suites: a small njRAT-style sample
//! with a config type initialized in `.cctor`, a guarded entry point, and an
//! embedded resource.
#![allow(dead_code)]

use malscope::prelude::*;
use malscope::format::records::{RawField, RawMethod, RawResource, RawType};

pub fn instruction(offset: u32, opcode: Opcode, operand: Operand) -> Instruction {
    Instruction::new(offset, opcode, operand)
}

pub fn ldstr(offset: u32, value: &str) -> Instruction {
    instruction(offset, Opcode::Ldstr, Operand::String(value.into()))
}

pub fn stsfld(offset: u32, parent: &str, name: &str) -> Instruction {
    instruction(
        offset,
        Opcode::Stsfld,
        Operand::Field(FieldRef {
            parent: parent.into(),
            name: name.into(),
        }),
    )
}

pub fn sample() -> RawAssembly {
    let config = RawType {
        name: "Config".into(),
        namespace: String::new(),
        flags: 0x0001,
        base_type: Some("System.Object".into()),
        fields: vec![
            RawField {
                name: "Key".into(),
                field_type: "System.String".into(),
                flags: 0x0016, // public static
                constant: None,
            },
            RawField {
                name: "Port".into(),
                field_type: "System.Int32".into(),
                flags: 0x0056, // public static literal
                constant: Some(Constant::I4(1177)),
            },
            RawField {
                name: "Missing".into(),
                field_type: "System.String".into(),
                flags: 0x0016,
                constant: None,
            },
        ],
        methods: vec![RawMethod {
            name: ".cctor".into(),
            flags: 0x1811,
            return_type: "System.Void".into(),
            params: Vec::new(),
            body: vec![
                ldstr(0, "abc"),
                ldstr(5, "secret"),
                stsfld(10, "Config", "Key"),
                instruction(15, Opcode::Ret, Operand::None),
            ],
        }],
    };

    let program = RawType {
        name: "Program".into(),
        namespace: String::new(),
        flags: 0x0001,
        base_type: Some("System.Object".into()),
        fields: Vec::new(),
        methods: vec![RawMethod {
            name: "Main".into(),
            flags: 0x0016,
            return_type: "System.Void".into(),
            params: vec!["args".into()],
            body: vec![
                instruction(
                    0,
                    Opcode::Call,
                    Operand::Method(MethodRef {
                        parent: "System.Diagnostics.Debugger".into(),
                        name: "get_IsAttached".into(),
                    }),
                ),
                instruction(5, Opcode::BrfalseS, Operand::Target(12)),
                instruction(7, Opcode::Ldstr, Operand::String("tamper".into())),
                instruction(12, Opcode::Ret, Operand::None),
            ],
        }],
    };

    RawAssembly {
        name: "sample".into(),
        types: vec![config, program],
        resources: vec![RawResource {
            name: "stub.resources".into(),
            offset: 0x200,
            length: 4096,
            flags: 0x0001,
            kind: ResourceKind::Embedded,
        }],
    }
}
