//! Convenient re-exports of the most commonly used types.
//!
//! ```rust,no_run
//! use malscope::prelude::*;
//!
//! let assembly = Assembly::from_file("sample.json".as_ref())?;
//! for literal in malscope::analysis::strings::harvest(&assembly) {
//!     println!("{literal}");
//! }
//! # Ok::<(), malscope::Error>(())
//! ```

pub use crate::{
    analysis::{
        patcher::{neutralize_calls, neutralize_debug_checks, DEBUGGER_CHECK},
        resolver::{extract_statics, extract_statics_plain},
        strings::harvest,
        walker::{InstructionSite, InstructionWalker, Location},
    },
    format::{
        instruction::{FieldRef, Instruction, MethodRef, Opcode, Operand},
        records::{Constant, MemberAccess, RawAssembly, ResourceKind},
        FormatEngine, JsonEngine,
    },
    metadata::{Assembly, Field, Method, Resource, TypeDef, TypeKind},
    Error, Result,
};
