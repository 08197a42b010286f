//! # arbor-core
//!
//! Owned-collection core for compiler IR trees: projects, files, and
//! modules with consistent parent links.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ir      → OwnedList, IrTree, node views, errors
//!   ↓
//! base    → Primitives (IrId, Arena)
//! ```
//!
//! ## Usage
//!
//! Nodes are `u32` handles into an [`IrTree`]; they start detached and are
//! woven into the structure through the tree's editing guards. The guards
//! are the only path to a child's parent back-reference, so the forward
//! lists and back-references can never disagree.
//!
//! ```
//! use arbor::IrTree;
//!
//! let mut tree = IrTree::new();
//! let project = tree.new_project();
//! let file = tree.new_file();
//! let module = tree.new_module();
//!
//! tree.files_mut(project)?.push(file)?;
//! tree.modules_mut(file)?.push(module)?;
//!
//! assert_eq!(tree.module_parent(module), Some(file));
//! assert_eq!(tree.file_parent(file), Some(project));
//! # Ok::<(), arbor::TreeError>(())
//! ```

/// Foundation types: IrId, Arena
pub mod base;

/// The IR tree: OwnedList, node handles, views
pub mod ir;

// Re-export the foundation types
pub use base::{Arena, IrId};

// Re-export the IR surface
pub use ir::{
    FileId, FileRef, HasParent, IrTree, ListEdit, ModuleId, ModuleRef, OwnedList, ParentStore,
    ProjectId, ProjectRef, TreeError,
};
