//! Foundation types for the IR tree.
//!
//! This module provides the storage primitives the IR layer is built on:
//! - [`IrId`] - the `u32`-backed handle contract
//! - [`Arena`] - insertion-ordered id-to-payload storage
//!
//! This module has NO dependencies on other arbor modules.

mod arena;

pub use arena::{Arena, IrId};
