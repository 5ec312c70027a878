//! Type definition wrapper and classification.

use std::fmt;

use strum::Display;

use crate::{
    format::records::{RawType, TypeAttributes, TYPE_SEMANTICS_MASK},
    metadata::{Field, Method},
};

/// What a type definition declares, derived from its flags and base type.
///
/// A closed classification instead of a string tag, so consumers get exhaustiveness
/// checking. [`TypeKind::Unknown`] covers contradictory metadata (an interface that
/// claims `System.Enum` as its base), which well-formed assemblies never produce.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// An ordinary class
    #[strum(serialize = "class")]
    Class,
    /// An interface
    #[strum(serialize = "interface")]
    Interface,
    /// An enumeration (extends `System.Enum`)
    #[strum(serialize = "enum")]
    Enum,
    /// Metadata flags and base type contradict each other
    #[strum(serialize = "unknown")]
    Unknown,
}

/// A view over one type definition.
///
/// Cheap to construct and copy; lookups build a fresh wrapper per call.
#[derive(Clone, Copy)]
pub struct TypeDef<'a> {
    raw: &'a RawType,
}

impl<'a> TypeDef<'a> {
    pub(crate) fn new(raw: &'a RawType) -> Self {
        TypeDef { raw }
    }

    /// The type's simple name
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.raw.name
    }

    /// The type's namespace, empty for the global namespace
    #[must_use]
    pub fn namespace(&self) -> &'a str {
        &self.raw.namespace
    }

    /// The namespace-qualified name (`Namespace.Name`, or just `Name` in the
    /// global namespace)
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.raw.namespace.is_empty() {
            self.raw.name.clone()
        } else {
            format!("{}.{}", self.raw.namespace, self.raw.name)
        }
    }

    /// Whether the type is visible outside its assembly
    #[must_use]
    pub fn is_public(&self) -> bool {
        TypeAttributes::from_raw(self.raw.flags).contains(TypeAttributes::PUBLIC)
    }

    /// Whether the type is abstract
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        TypeAttributes::from_raw(self.raw.flags).contains(TypeAttributes::ABSTRACT)
    }

    /// Whether the type is sealed
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        TypeAttributes::from_raw(self.raw.flags).contains(TypeAttributes::SEALED)
    }

    /// Classify this definition as class, interface or enum
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        let interface = self.raw.flags & TYPE_SEMANTICS_MASK != 0;
        let extends_enum = self.raw.base_type.as_deref() == Some("System.Enum");

        match (interface, extends_enum) {
            (true, false) => TypeKind::Interface,
            (false, true) => TypeKind::Enum,
            (false, false) => TypeKind::Class,
            (true, true) => TypeKind::Unknown,
        }
    }

    /// All fields declared on this type, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = Field<'a>> + 'a {
        let raw = self.raw;
        raw.fields.iter().map(move |f| Field::new(raw, f))
    }

    /// Look up a field by its exact name.
    ///
    /// Returns the first match in declaration order, `None` if there is none.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Field<'a>> {
        self.fields().find(|f| f.name() == name)
    }

    /// All methods declared on this type, in declaration order
    pub fn methods(&self) -> impl Iterator<Item = Method<'a>> + 'a {
        self.raw.methods.iter().map(Method::new)
    }

    /// Look up a method by its exact name (`.cctor` finds the static initializer).
    ///
    /// Returns the first match in declaration order, `None` if there is none.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<Method<'a>> {
        self.methods().find(|m| m.name() == name)
    }

    pub(crate) fn raw(&self) -> &'a RawType {
        self.raw
    }
}

impl fmt::Display for TypeDef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            if self.is_public() { "public" } else { "private" },
            self.kind(),
            self.fullname()
        )
    }
}
