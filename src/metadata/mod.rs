//! Typed wrappers over the decoded assembly view.
//!
//! The raw records in [`crate::format::records`] are plain table rows. This module puts
//! a borrow-based object model on top of them: an [`Assembly`] owning the decoded view,
//! and per-entity wrappers ([`TypeDef`], [`Field`], [`Method`], [`Resource`]) that
//! project names, visibility and kind out of the raw flags and offer exact-name child
//! lookup. Wrappers are built on demand per lookup call and are immutable value views;
//! nothing is cached between calls.
//!
//! Lookups that find no match return `None`, never an error. Where the decoded view
//! contains duplicate names, the first match in declaration order wins.
//!
//! # Key Types
//! - [`Assembly`] - Root of the object model, owner of the decoded view
//! - [`TypeDef`], [`TypeKind`] - Type definitions and their classification
//! - [`Field`], [`Method`], [`Resource`] - Member and resource views

mod assembly;
mod field;
mod method;
mod resource;
mod types;

pub use assembly::Assembly;
pub use field::Field;
pub use method::Method;
pub use resource::Resource;
pub use types::{TypeDef, TypeKind};
