//! Manifest resource wrapper.

use std::fmt;

use crate::format::records::{RawResource, ResourceAttributes, ResourceKind};

/// A view over one embedded resource entry.
///
/// Resource *data* stays with the format engine; this view only projects the
/// manifest row (name, placement, visibility).
#[derive(Clone, Copy)]
pub struct Resource<'a> {
    raw: &'a RawResource,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(raw: &'a RawResource) -> Self {
        Resource { raw }
    }

    /// The resource's name
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.raw.name
    }

    /// Byte offset of the resource data within its container
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.raw.offset
    }

    /// Length of the resource data in bytes
    #[must_use]
    pub fn len(&self) -> u32 {
        self.raw.length
    }

    /// Whether the resource data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.length == 0
    }

    /// Whether the resource is exported from the assembly
    #[must_use]
    pub fn is_public(&self) -> bool {
        ResourceAttributes::from_bits_truncate(self.raw.flags)
            .contains(ResourceAttributes::PUBLIC)
    }

    /// Where the resource data lives
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.raw.kind
    }
}

impl fmt::Display for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({} bytes)",
            if self.is_public() { "public" } else { "private" },
            self.kind(),
            self.name(),
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawResource {
        RawResource {
            name: "payload.bin".into(),
            offset: 0x400,
            length: 1024,
            flags: 0x0001,
            kind: ResourceKind::Embedded,
        }
    }

    #[test]
    fn projection() {
        let raw = sample();
        let view = Resource::new(&raw);

        assert_eq!(view.name(), "payload.bin");
        assert_eq!(view.offset(), 0x400);
        assert_eq!(view.len(), 1024);
        assert!(!view.is_empty());
        assert!(view.is_public());
        assert_eq!(view.kind(), ResourceKind::Embedded);
    }

    #[test]
    fn display_declaration() {
        let raw = sample();
        assert_eq!(
            Resource::new(&raw).to_string(),
            "public embedded payload.bin (1024 bytes)"
        );
    }
}
