//! The IR tree: node storage and structural mutation.
//!
//! An [`IrTree`] owns one arena per node kind. Nodes are created detached
//! (no parent, no children) and woven into the structure through the
//! editing guards returned by [`files_mut`](IrTree::files_mut) and
//! [`modules_mut`](IrTree::modules_mut). Each guard pairs an owner's
//! [`OwnedList`] with the arena holding its children, which is the only
//! borrow shape under which the list can keep forward links and
//! back-references in step.
//!
//! Parent fields live in the crate-private node payloads, so no caller can
//! write one directly; upward navigation goes through
//! [`file_parent`](IrTree::file_parent) and
//! [`module_parent`](IrTree::module_parent).

use std::ops::Deref;

use crate::base::{Arena, IrId};
use crate::ir::error::TreeError;
use crate::ir::ids::{FileId, ModuleId, ProjectId};
use crate::ir::owned_list::{HasParent, OwnedList, ParentStore};

/// Payload of a project node: the ordered files it owns.
#[derive(Debug)]
pub(crate) struct ProjectData {
    files: OwnedList<FileId, ProjectId>,
}

/// Payload of a file node.
#[derive(Debug)]
pub(crate) struct FileData {
    parent: Option<ProjectId>,
    modules: OwnedList<ModuleId, FileId>,
}

/// Payload of a module node, the leaf level.
#[derive(Debug)]
pub(crate) struct ModuleData {
    parent: Option<FileId>,
}

impl HasParent<ProjectId> for FileData {
    fn parent(&self) -> Option<ProjectId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<ProjectId>) {
        self.parent = parent;
    }
}

impl HasParent<FileId> for ModuleData {
    fn parent(&self) -> Option<FileId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<FileId>) {
        self.parent = parent;
    }
}

/// The IR tree: projects containing files containing modules.
///
/// All node state lives here; handles are plain indices into it. Mutation
/// requires `&mut IrTree`, so the tree is single-writer by construction.
#[derive(Debug, Default)]
pub struct IrTree {
    pub(crate) projects: Arena<ProjectId, ProjectData>,
    pub(crate) files: Arena<FileId, FileData>,
    pub(crate) modules: Arena<ModuleId, ModuleData>,
}

impl IrTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new project with no files.
    pub fn new_project(&mut self) -> ProjectId {
        self.projects.alloc_with(|id| ProjectData {
            files: OwnedList::new(id),
        })
    }

    /// Allocate a new detached file with no modules.
    pub fn new_file(&mut self) -> FileId {
        self.files.alloc_with(|id| FileData {
            parent: None,
            modules: OwnedList::new(id),
        })
    }

    /// Allocate a new detached module.
    pub fn new_module(&mut self) -> ModuleId {
        self.modules.alloc(ModuleData { parent: None })
    }

    /// The files of `project`, or `None` for a stale handle.
    pub fn files(&self, project: ProjectId) -> Option<&OwnedList<FileId, ProjectId>> {
        self.projects.get(project).map(|data| &data.files)
    }

    /// The modules of `file`, or `None` for a stale handle.
    pub fn modules(&self, file: FileId) -> Option<&OwnedList<ModuleId, FileId>> {
        self.files.get(file).map(|data| &data.modules)
    }

    /// The project currently containing `file`, `None` while detached.
    pub fn file_parent(&self, file: FileId) -> Option<ProjectId> {
        self.files.get(file).and_then(|data| data.parent)
    }

    /// The file currently containing `module`, `None` while detached.
    pub fn module_parent(&self, module: ModuleId) -> Option<FileId> {
        self.modules.get(module).and_then(|data| data.parent)
    }

    /// Open `project`'s file list for mutation.
    pub fn files_mut(
        &mut self,
        project: ProjectId,
    ) -> Result<ListEdit<'_, FileId, ProjectId>, TreeError> {
        let Self {
            projects, files, ..
        } = self;
        let data = projects.get_mut(project).ok_or(TreeError::InvalidArgument)?;
        Ok(ListEdit {
            list: &mut data.files,
            store: files,
        })
    }

    /// Open `file`'s module list for mutation.
    pub fn modules_mut(
        &mut self,
        file: FileId,
    ) -> Result<ListEdit<'_, ModuleId, FileId>, TreeError> {
        let Self { files, modules, .. } = self;
        let data = files.get_mut(file).ok_or(TreeError::InvalidArgument)?;
        Ok(ListEdit {
            list: &mut data.modules,
            store: modules,
        })
    }

    /// Number of projects ever allocated.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of files ever allocated.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of modules ever allocated.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

/// A borrow of one owner's child list together with the arena holding the
/// children, ready for structural edits.
///
/// Read operations are available through `Deref` to [`OwnedList`]; the
/// mutators forward to the list with the store supplied.
pub struct ListEdit<'a, C, O> {
    list: &'a mut OwnedList<C, O>,
    store: &'a mut dyn ParentStore<C, O>,
}

impl<C, O> std::fmt::Debug for ListEdit<'_, C, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEdit").finish_non_exhaustive()
    }
}

impl<C: IrId, O: IrId> ListEdit<'_, C, O> {
    /// Insert `child` at `index`. See [`OwnedList::insert`].
    pub fn insert(&mut self, index: usize, child: C) -> Result<(), TreeError> {
        self.list.insert(self.store, index, child)
    }

    /// Append `child`. See [`OwnedList::push`].
    pub fn push(&mut self, child: C) -> Result<(), TreeError> {
        self.list.push(self.store, child)
    }

    /// Replace the child at `index`. See [`OwnedList::set`].
    pub fn set(&mut self, index: usize, child: C) -> Result<C, TreeError> {
        self.list.set(self.store, index, child)
    }

    /// Detach and return the child at `index`. See [`OwnedList::remove_at`].
    pub fn remove_at(&mut self, index: usize) -> Result<C, TreeError> {
        self.list.remove_at(self.store, index)
    }
}

impl<C, O> Deref for ListEdit<'_, C, O> {
    type Target = OwnedList<C, O>;

    fn deref(&self) -> &Self::Target {
        self.list
    }
}
