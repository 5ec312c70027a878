//! The root object of the metadata model.

use std::path::Path;

use crate::{
    analysis::walker::{InstructionWalker, Location},
    format::{self, instruction::Opcode, records::RawAssembly},
    metadata::{Resource, TypeDef},
    Result,
};

/// A loaded managed assembly.
///
/// Owns the decoded view produced by the format engine and hands out borrow-based
/// wrappers over it. The assembly is read-only with one exception: the patcher may
/// swap the opcode of an instruction it has located, through [`Assembly::replace_opcode`].
///
/// # Examples
///
/// ```rust,no_run
/// use malscope::metadata::Assembly;
/// use std::path::Path;
///
/// let assembly = Assembly::from_file(Path::new("sample.json"))?;
/// for ty in assembly.types() {
///     println!("{}", ty.fullname());
/// }
/// # Ok::<(), malscope::Error>(())
/// ```
#[derive(Debug)]
pub struct Assembly {
    raw: RawAssembly,
}

impl Assembly {
    /// Load an assembly from disk through the format engine responsible for `path`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::MissingDependency`] when the input needs the native decoder
    /// backend and none is installed, [`crate::Error::NotSupported`] for unrecognized
    /// file types, and I/O or decode errors from the engine itself.
    pub fn from_file(path: &Path) -> Result<Self> {
        let engine = format::engine_for(path)?;
        let raw = engine.load(path)?;
        log::debug!(
            "loaded '{}': {} types, {} resources",
            raw.name,
            raw.types.len(),
            raw.resources.len()
        );
        Ok(Assembly { raw })
    }

    /// Wrap an already-decoded view, e.g. one received from an embedding decoder.
    #[must_use]
    pub fn from_raw(raw: RawAssembly) -> Self {
        Assembly { raw }
    }

    /// The assembly's simple name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.raw.name
    }

    /// All type definitions, in declaration order
    pub fn types(&self) -> impl Iterator<Item = TypeDef<'_>> {
        self.raw.types.iter().map(TypeDef::new)
    }

    /// Look up a type definition by its exact simple name.
    ///
    /// Returns the first match in declaration order, `None` if there is none.
    #[must_use]
    pub fn type_by_name(&self, name: &str) -> Option<TypeDef<'_>> {
        self.types().find(|t| t.name() == name)
    }

    /// All manifest resources, in declaration order
    pub fn resources(&self) -> impl Iterator<Item = Resource<'_>> {
        self.raw.resources.iter().map(Resource::new)
    }

    /// Look up a manifest resource by its exact name.
    ///
    /// Returns the first match in declaration order, `None` if there is none.
    #[must_use]
    pub fn resource_by_name(&self, name: &str) -> Option<Resource<'_>> {
        self.resources().find(|r| r.name() == name)
    }

    /// A fresh traversal over every instruction in every method body of this assembly.
    ///
    /// Order is deterministic: types in declaration order, methods in declaration
    /// order, instructions in stream order. Each call starts over; no cursor state
    /// is shared between traversals.
    #[must_use]
    pub fn instructions(&self) -> InstructionWalker<'_> {
        InstructionWalker::new(&self.raw.types)
    }

    /// Swap the opcode of the instruction at `location`, leaving its operand and
    /// position untouched.
    ///
    /// This is the single mutation entry point of the whole model; everything else
    /// treats the decoded view as immutable. Returns `false` when `location` does
    /// not address an instruction (nothing is changed in that case).
    pub fn replace_opcode(&mut self, location: Location, opcode: Opcode) -> bool {
        let Some(inst) = self
            .raw
            .types
            .get_mut(location.type_index)
            .and_then(|t| t.methods.get_mut(location.method_index))
            .and_then(|m| m.body.get_mut(location.instruction_index))
        else {
            return false;
        };

        log::debug!(
            "replacing opcode at IL_{:04x}: {} -> {}",
            inst.offset,
            inst.opcode,
            opcode
        );
        inst.opcode = opcode;
        true
    }

    /// Hand the (possibly patched) view back to the format engine for re-encoding
    /// to `dest`.
    ///
    /// # Errors
    ///
    /// Engine selection and serialization errors, as for [`Assembly::from_file`].
    pub fn save(&self, dest: &Path) -> Result<()> {
        let engine = format::engine_for(dest)?;
        engine.save(&self.raw, dest)
    }

    /// The underlying decoded view
    #[must_use]
    pub fn raw(&self) -> &RawAssembly {
        &self.raw
    }
}
