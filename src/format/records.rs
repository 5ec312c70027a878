//! Decoded metadata records handed over by the binary format engine.
//!
//! These are plain owned structures with a 1:1 mapping to what a decoder produces from
//! the metadata tables of a managed binary: an assembly, its type definitions, and per
//! type the fields, methods and method bodies, plus the manifest resources. Nothing in
//! here performs decoding; the records are the *output* of decoding and the input to
//! every scan in this crate.
//!
//! # Key Types
//! - [`RawAssembly`], [`RawType`], [`RawField`], [`RawMethod`], [`RawResource`]: decoded rows
//! - [`TypeAttributes`], [`FieldAttributes`], [`MethodAttributes`], [`ResourceAttributes`]:
//!   ECMA-335 attribute bitmasks with extraction helpers
//! - [`MemberAccess`]: the decoded 3-bit accessibility value shared by fields and methods
//! - [`Constant`]: a compile-time constant from the metadata constant table
//!
//! Attribute values are stored raw (`u32`) exactly as the decoder saw them; the bitflags
//! types interpret them on demand.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::format::instruction::Instruction;

/// Bitmask for member accessibility extraction (fields and methods)
pub const MEMBER_ACCESS_MASK: u32 = 0x0007;
/// Bitmask for type visibility extraction
pub const TYPE_VISIBILITY_MASK: u32 = 0x0007;
/// Bitmask for class/interface semantics extraction
pub const TYPE_SEMANTICS_MASK: u32 = 0x0020;
/// Bitmask for resource visibility extraction
pub const RESOURCE_VISIBILITY_MASK: u32 = 0x0007;

bitflags! {
    #[derive(PartialEq, Clone, Copy)]
    /// Type definition attributes, ECMA-335 §II.23.1.15
    pub struct TypeAttributes: u32 {
        /// Type is visible outside the assembly
        const PUBLIC = 0x0001;
        /// Type is an interface, otherwise a class
        const INTERFACE = 0x0020;
        /// Type is abstract
        const ABSTRACT = 0x0080;
        /// Type cannot be derived from
        const SEALED = 0x0100;
        /// Type name is special
        const SPECIAL_NAME = 0x0400;
    }
}

impl TypeAttributes {
    /// Extract type attributes from a raw flags value
    #[must_use]
    pub fn from_raw(flags: u32) -> Self {
        Self::from_bits_truncate(flags)
    }
}

bitflags! {
    #[derive(PartialEq, Clone, Copy)]
    /// Field definition attributes, ECMA-335 §II.23.1.5
    pub struct FieldAttributes: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0010;
        /// Field can only be initialized, not written after init
        const INIT_ONLY = 0x0020;
        /// Value is a compile-time constant
        const LITERAL = 0x0040;
        /// Field has a default value in the constant table
        const HAS_DEFAULT = 0x8000;
    }
}

impl FieldAttributes {
    /// Extract field attributes from a raw flags value, dropping the access bits
    #[must_use]
    pub fn from_raw(flags: u32) -> Self {
        Self::from_bits_truncate(flags & !MEMBER_ACCESS_MASK)
    }
}

bitflags! {
    #[derive(PartialEq, Clone, Copy)]
    /// Method definition attributes, ECMA-335 §II.23.1.10
    pub struct MethodAttributes: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0010;
        /// Method cannot be overridden
        const FINAL = 0x0020;
        /// Method is virtual
        const VIRTUAL = 0x0040;
        /// Method hides by name+sig, else just by name
        const HIDE_BY_SIG = 0x0080;
        /// Method does not provide an implementation
        const ABSTRACT = 0x0400;
        /// Method is special
        const SPECIAL_NAME = 0x0800;
        /// CLI provides 'special' behavior, depending upon the name of the method
        const RTSPECIAL_NAME = 0x1000;
    }
}

impl MethodAttributes {
    /// Extract method attributes from a raw flags value, dropping the access bits
    #[must_use]
    pub fn from_raw(flags: u32) -> Self {
        Self::from_bits_truncate(flags & !MEMBER_ACCESS_MASK)
    }
}

bitflags! {
    #[derive(PartialEq, Clone, Copy)]
    /// Manifest resource attributes, ECMA-335 §II.23.1.9
    pub struct ResourceAttributes: u32 {
        /// Resource is exported from the assembly
        const PUBLIC = 0x0001;
        /// Resource is private to the assembly
        const PRIVATE = 0x0002;
    }
}

/// Member accessibility, decoded from the low 3 bits of field/method flags,
/// ECMA-335 §II.23.1.5 and §II.23.1.10
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberAccess {
    /// Member not referenceable
    #[strum(serialize = "compilercontrolled")]
    CompilerControlled,
    /// Accessible only by the parent type
    #[strum(serialize = "private")]
    Private,
    /// Accessible by sub-types only in this assembly
    #[strum(serialize = "famandassem")]
    FamAndAssem,
    /// Accessible by anyone in the assembly
    #[strum(serialize = "assembly")]
    Assembly,
    /// Accessible only by type and sub-types
    #[strum(serialize = "family")]
    Family,
    /// Accessible by sub-types anywhere, plus anyone in the assembly
    #[strum(serialize = "famorassem")]
    FamOrAssem,
    /// Accessible by anyone who has visibility to this scope
    #[strum(serialize = "public")]
    Public,
}

impl MemberAccess {
    /// Extract the accessibility from a raw field or method flags value
    #[must_use]
    pub fn from_raw(flags: u32) -> Self {
        match flags & MEMBER_ACCESS_MASK {
            0x0001 => MemberAccess::Private,
            0x0002 => MemberAccess::FamAndAssem,
            0x0003 => MemberAccess::Assembly,
            0x0004 => MemberAccess::Family,
            0x0005 => MemberAccess::FamOrAssem,
            0x0006 => MemberAccess::Public,
            _ => MemberAccess::CompilerControlled,
        }
    }
}

/// How an embedded resource is stored, derived from the manifest resource
/// implementation column
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Resource data is embedded in this assembly
    #[strum(serialize = "embedded")]
    Embedded,
    /// Resource lives in a separate file of the same assembly
    #[strum(serialize = "file")]
    File,
    /// Resource is forwarded to another assembly
    #[strum(serialize = "assemblyref")]
    AssemblyRef,
}

/// A compile-time constant from the metadata constant table, ECMA-335 §II.22.9.
///
/// The resolver returns these directly when a field carries one; the `.cctor` scan
/// only ever produces [`Constant::String`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    /// Boolean constant
    Bool(bool),
    /// UTF-16 character constant
    Char(char),
    /// 32-bit signed integer constant (covers the 8/16/32-bit ECMA widths)
    I4(i32),
    /// 64-bit signed integer constant
    I8(i64),
    /// 32-bit unsigned integer constant
    U4(u32),
    /// 64-bit unsigned integer constant
    U8(u64),
    /// 32-bit floating point constant
    R4(f32),
    /// 64-bit floating point constant
    R8(f64),
    /// String constant
    String(String),
    /// Null reference constant
    Null,
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Bool(v) => write!(f, "{v}"),
            Constant::Char(v) => write!(f, "{v}"),
            Constant::I4(v) => write!(f, "{v}"),
            Constant::I8(v) => write!(f, "{v}"),
            Constant::U4(v) => write!(f, "{v}"),
            Constant::U8(v) => write!(f, "{v}"),
            Constant::R4(v) => write!(f, "{v}"),
            Constant::R8(v) => write!(f, "{v}"),
            Constant::String(v) => write!(f, "{v}"),
            Constant::Null => write!(f, "null"),
        }
    }
}

/// A decoded assembly: the root record produced by the format engine.
///
/// Child records keep the declaration order of the underlying metadata tables; no
/// consumer in this crate ever reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAssembly {
    /// Assembly simple name
    pub name: String,
    /// Type definitions in declaration order
    pub types: Vec<RawType>,
    /// Manifest resources in declaration order
    pub resources: Vec<RawResource>,
}

/// A decoded type definition row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawType {
    /// Type simple name
    pub name: String,
    /// Namespace, empty for the global namespace
    pub namespace: String,
    /// Raw `TypeAttributes` value
    pub flags: u32,
    /// Full name of the base type, `None` for interfaces and `System.Object`
    pub base_type: Option<String>,
    /// Fields declared on this type, in declaration order
    pub fields: Vec<RawField>,
    /// Methods declared on this type, in declaration order
    pub methods: Vec<RawMethod>,
}

/// A decoded field definition row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    /// Field name
    pub name: String,
    /// Full name of the declared field type
    pub field_type: String,
    /// Raw `FieldAttributes` value
    pub flags: u32,
    /// Compile-time constant, present iff the constant table has a row for this field
    pub constant: Option<Constant>,
}

/// A decoded method definition row together with its decoded body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMethod {
    /// Method name (`.ctor` / `.cctor` for constructors and type initializers)
    pub name: String,
    /// Raw `MethodAttributes` value
    pub flags: u32,
    /// Full name of the return type
    pub return_type: String,
    /// Parameter names in signature order
    pub params: Vec<String>,
    /// Decoded instruction stream, empty if the method has no body
    pub body: Vec<Instruction>,
}

/// A decoded manifest resource row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResource {
    /// Resource name
    pub name: String,
    /// Byte offset of the resource data within its container
    pub offset: u32,
    /// Length of the resource data in bytes
    pub length: u32,
    /// Raw `ResourceAttributes` value
    pub flags: u32,
    /// Where the resource data lives
    pub kind: ResourceKind,
}
