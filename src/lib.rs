#![deny(missing_docs)]
#![allow(dead_code)]

//! # malscope
//!
//! A static analysis toolkit for compiled managed (.NET) binaries, tuned for pulling
//! configuration data out of simple obfuscated samples. It recovers structural metadata
//! (types, fields, methods, embedded resources), statically resolves the value a static
//! field will hold once the type initializer has run, harvests every string literal in
//! an assembly, and neutralizes the common debugger-presence check by inverting the
//! conditional branch that follows it.
//!
//! Container parsing and instruction decoding are *not* done here. A binary format
//! engine (see [`format`]) hands this crate a fully decoded, read-only view of the
//! assembly; everything in this crate is a scan over that view, plus one auditable
//! opcode mutation used by the patcher.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use malscope::prelude::*;
//!
//! let assembly = Assembly::from_file("sample.json".as_ref())?;
//! if let Some(config) = assembly.type_by_name("OK") {
//!     if let Some(host) = config.field("HH").and_then(|f| f.value()) {
//!         println!("host = {host}");
//!     }
//! }
//! # Ok::<(), malscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `malscope` is organized into several key modules:
//!
//! - [`format`] - The boundary to the binary format engine: decoded records,
//!   instruction/opcode/operand types, and the engine trait
//! - [`metadata`] - Typed wrappers over the decoded records with name-based lookup
//! - [`analysis`] - Static value resolution, assembly-wide instruction iteration,
//!   string harvesting, and the anti-debug patcher
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling for environment-level failures
//!
//! Lookups that find nothing return `Option::None` rather than an error; only
//! environment-level failures (a missing decoder backend, unreadable input) surface
//! through [`Error`].

#[macro_use]
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod test;

pub mod analysis;
pub mod format;
pub mod metadata;
pub mod prelude;

pub use error::Error;

/// Convenience alias for operations that can fail with a [`crate::Error`]
pub type Result<T> = std::result::Result<T, Error>;
