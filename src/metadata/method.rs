//! Method definition wrapper.

use std::fmt;

use crate::format::{
    instruction::Instruction,
    records::{MemberAccess, MethodAttributes, RawMethod},
};

/// A view over one method definition and its decoded body.
#[derive(Clone, Copy)]
pub struct Method<'a> {
    raw: &'a RawMethod,
}

impl<'a> Method<'a> {
    pub(crate) fn new(raw: &'a RawMethod) -> Self {
        Method { raw }
    }

    /// The method's name
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.raw.name
    }

    /// The method's accessibility
    #[must_use]
    pub fn visibility(&self) -> MemberAccess {
        MemberAccess::from_raw(self.raw.flags)
    }

    /// Whether the method is public
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility() == MemberAccess::Public
    }

    /// Whether the method is static
    #[must_use]
    pub fn is_static(&self) -> bool {
        MethodAttributes::from_raw(self.raw.flags).contains(MethodAttributes::STATIC)
    }

    /// Whether the method is final
    #[must_use]
    pub fn is_final(&self) -> bool {
        MethodAttributes::from_raw(self.raw.flags).contains(MethodAttributes::FINAL)
    }

    /// Whether the method is virtual
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        MethodAttributes::from_raw(self.raw.flags).contains(MethodAttributes::VIRTUAL)
    }

    /// Full name of the return type
    #[must_use]
    pub fn return_type(&self) -> &'a str {
        &self.raw.return_type
    }

    /// Parameter names, in signature order
    #[must_use]
    pub fn params(&self) -> &'a [String] {
        &self.raw.params
    }

    /// The decoded instruction stream, in exactly the order the decoder produced.
    ///
    /// Empty for methods without a body (abstract, extern).
    #[must_use]
    pub fn instructions(&self) -> &'a [Instruction] {
        &self.raw.body
    }

    /// Whether the method has a body
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.raw.body.is_empty()
    }
}

impl fmt::Display for Method<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visibility())?;
        if self.is_final() {
            write!(f, " final")?;
        }
        if self.is_static() {
            write!(f, " static")?;
        }
        if self.is_virtual() {
            write!(f, " virtual")?;
        }
        write!(f, " {} {}", self.return_type(), self.name())
    }
}
