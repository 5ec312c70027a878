//! Field definition wrapper and its value resolution entry point.

use std::fmt;

use crate::{
    analysis::resolver,
    format::records::{Constant, FieldAttributes, MemberAccess, RawField, RawType},
};

/// A view over one field definition.
///
/// Carries a back-reference to the declaring type so [`Field::value`] can find the
/// static initializer when the metadata constant table has nothing for this field.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    parent: &'a RawType,
    raw: &'a RawField,
}

impl<'a> Field<'a> {
    pub(crate) fn new(parent: &'a RawType, raw: &'a RawField) -> Self {
        Field { parent, raw }
    }

    /// The field's name
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.raw.name
    }

    /// Full name of the declared field type
    #[must_use]
    pub fn field_type(&self) -> &'a str {
        &self.raw.field_type
    }

    /// The field's accessibility
    #[must_use]
    pub fn visibility(&self) -> MemberAccess {
        MemberAccess::from_raw(self.raw.flags)
    }

    /// Whether the field is public
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility() == MemberAccess::Public
    }

    /// Whether the field is static (type-scoped)
    #[must_use]
    pub fn is_static(&self) -> bool {
        FieldAttributes::from_raw(self.raw.flags).contains(FieldAttributes::STATIC)
    }

    /// Whether the field's value is a compile-time literal
    #[must_use]
    pub fn is_literal(&self) -> bool {
        FieldAttributes::from_raw(self.raw.flags).contains(FieldAttributes::LITERAL)
    }

    /// The field's constant-table entry, if the metadata carries one
    #[must_use]
    pub fn constant(&self) -> Option<&'a Constant> {
        self.raw.constant.as_ref()
    }

    /// The value this field holds once its type is initialized, recovered statically.
    ///
    /// The metadata constant wins when present; otherwise, for static fields, the
    /// declaring type's `.cctor` is scanned for the string stored into this field
    /// (see [`crate::analysis::resolver`]). `None` means the value could not be
    /// determined, which is an ordinary outcome for anything this heuristic does
    /// not cover.
    #[must_use]
    pub fn value(&self) -> Option<Constant> {
        resolver::resolve(self.parent, self.raw)
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visibility())?;
        if self.is_static() {
            write!(f, " static")?;
        }
        write!(f, " {} {}", self.field_type(), self.name())
    }
}
