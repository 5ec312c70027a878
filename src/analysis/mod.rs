//! Scans over the decoded assembly view.
//!
//! Everything here is a synchronous, single-threaded pass over the in-memory view:
//! lazy iteration composes types → methods → instructions, and the three consumers
//! (resolver, patcher, harvester) ride on top of that ordering. Traversals may be
//! abandoned at any point; there is no state to roll back.
//!
//! # Key Modules
//! - [`walker`] - Assembly-wide instruction iteration with stable, deterministic order
//! - [`resolver`] - Static field value recovery from metadata constants and `.cctor` scans
//! - [`patcher`] - Debugger-presence check neutralization (branch inversion)
//! - [`strings`] - Bulk extraction of string literals

pub mod patcher;
pub mod resolver;
pub mod strings;
pub mod walker;
