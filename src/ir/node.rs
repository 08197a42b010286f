//! Borrowed node views: navigation, structural equality, rendering.
//!
//! A view pairs a node handle with the tree it lives in, which is what
//! recursive operations need. Equality and hashing are structural over the
//! children lists only; parent links and handle identity play no part, so
//! two independently built trees of the same shape compare equal. Rendering
//! follows the same recursion: `Project([File([Module]), File([])])`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ir::ids::{FileId, ModuleId, ProjectId};
use crate::ir::owned_list::OwnedList;
use crate::ir::tree::IrTree;

impl IrTree {
    /// View of `project`, or `None` for a stale handle.
    pub fn project(&self, id: ProjectId) -> Option<ProjectRef<'_>> {
        self.projects.contains(id).then(|| ProjectRef { tree: self, id })
    }

    /// View of `file`, or `None` for a stale handle.
    pub fn file(&self, id: FileId) -> Option<FileRef<'_>> {
        self.files.contains(id).then(|| FileRef { tree: self, id })
    }

    /// View of `module`, or `None` for a stale handle.
    pub fn module(&self, id: ModuleId) -> Option<ModuleRef<'_>> {
        self.modules.contains(id).then(|| ModuleRef { tree: self, id })
    }
}

/// A borrowed view of a project node.
#[derive(Copy, Clone)]
pub struct ProjectRef<'t> {
    tree: &'t IrTree,
    id: ProjectId,
}

impl<'t> ProjectRef<'t> {
    /// The handle this view wraps.
    pub fn id(self) -> ProjectId {
        self.id
    }

    /// The project's file list.
    pub fn file_list(self) -> &'t OwnedList<FileId, ProjectId> {
        // Views exist only for live handles and arenas never free.
        self.tree.files(self.id).expect("live project handle")
    }

    /// Iterate over the project's files in declaration order.
    pub fn files(self) -> impl Iterator<Item = FileRef<'t>> {
        let tree = self.tree;
        self.file_list().iter().map(move |id| FileRef { tree, id })
    }

    /// The file at `index`, if any.
    pub fn file(self, index: usize) -> Option<FileRef<'t>> {
        let id = self.file_list().get(index)?;
        Some(FileRef { tree: self.tree, id })
    }
}

/// A borrowed view of a file node.
#[derive(Copy, Clone)]
pub struct FileRef<'t> {
    tree: &'t IrTree,
    id: FileId,
}

impl<'t> FileRef<'t> {
    /// The handle this view wraps.
    pub fn id(self) -> FileId {
        self.id
    }

    /// The project currently containing this file, `None` while detached.
    pub fn parent(self) -> Option<ProjectRef<'t>> {
        let id = self.tree.file_parent(self.id)?;
        Some(ProjectRef { tree: self.tree, id })
    }

    /// The file's module list.
    pub fn module_list(self) -> &'t OwnedList<ModuleId, FileId> {
        self.tree.modules(self.id).expect("live file handle")
    }

    /// Iterate over the file's modules in declaration order.
    pub fn modules(self) -> impl Iterator<Item = ModuleRef<'t>> {
        let tree = self.tree;
        self.module_list().iter().map(move |id| ModuleRef { tree, id })
    }

    /// The module at `index`, if any.
    pub fn module(self, index: usize) -> Option<ModuleRef<'t>> {
        let id = self.module_list().get(index)?;
        Some(ModuleRef { tree: self.tree, id })
    }
}

/// A borrowed view of a module node.
#[derive(Copy, Clone)]
pub struct ModuleRef<'t> {
    tree: &'t IrTree,
    id: ModuleId,
}

impl<'t> ModuleRef<'t> {
    /// The handle this view wraps.
    pub fn id(self) -> ModuleId {
        self.id
    }

    /// The file currently containing this module, `None` while detached.
    pub fn parent(self) -> Option<FileRef<'t>> {
        let id = self.tree.module_parent(self.id)?;
        Some(FileRef { tree: self.tree, id })
    }
}

// Structural equality: children only, recursively. Iterator::eq compares
// length as well as elements, so differing child counts are unequal.

impl PartialEq for ProjectRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.files().eq(other.files())
    }
}

impl Eq for ProjectRef<'_> {}

impl PartialEq for FileRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.modules().eq(other.modules())
    }
}

impl Eq for FileRef<'_> {}

impl PartialEq for ModuleRef<'_> {
    fn eq(&self, _other: &Self) -> bool {
        // Modules are leaves; two modules are structurally identical.
        true
    }
}

impl Eq for ModuleRef<'_> {}

impl Hash for ProjectRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(b'P');
        for file in self.files() {
            file.hash(state);
        }
    }
}

impl Hash for FileRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(b'F');
        for module in self.modules() {
            module.hash(state);
        }
    }
}

impl Hash for ModuleRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(b'M');
    }
}

fn write_children<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    children: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, child) in children.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str("]")
}

impl fmt::Display for ProjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Project(")?;
        write_children(f, self.files())?;
        f.write_str(")")
    }
}

impl fmt::Display for FileRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("File(")?;
        write_children(f, self.modules())?;
        f.write_str(")")
    }
}

impl fmt::Display for ModuleRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Module")
    }
}

impl fmt::Debug for ProjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {self}", self.id)
    }
}

impl fmt::Debug for FileRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {self}", self.id)
    }
}

impl fmt::Debug for ModuleRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Project with two files: one module in the first, none in the second.
    fn sample_project(tree: &mut IrTree) -> ProjectId {
        let project = tree.new_project();
        let file_a = tree.new_file();
        let file_b = tree.new_file();
        let module = tree.new_module();
        tree.files_mut(project).unwrap().push(file_a).unwrap();
        tree.files_mut(project).unwrap().push(file_b).unwrap();
        tree.modules_mut(file_a).unwrap().push(module).unwrap();
        project
    }

    #[test]
    fn test_rendering_recurses_over_children() {
        let mut tree = IrTree::new();
        let project = sample_project(&mut tree);

        let rendered = tree.project(project).unwrap().to_string();
        assert_eq!(rendered, "Project([File([Module]), File([])])");
    }

    #[test]
    fn test_equal_shapes_compare_equal() {
        let mut tree = IrTree::new();
        let a = sample_project(&mut tree);
        let b = sample_project(&mut tree);

        assert_eq!(tree.project(a).unwrap(), tree.project(b).unwrap());
    }

    #[test]
    fn test_equality_spans_trees() {
        let mut tree_a = IrTree::new();
        let mut tree_b = IrTree::new();
        let a = sample_project(&mut tree_a);
        let b = sample_project(&mut tree_b);

        assert_eq!(tree_a.project(a).unwrap(), tree_b.project(b).unwrap());
    }

    #[test]
    fn test_reordered_children_compare_unequal() {
        let mut tree = IrTree::new();
        let a = sample_project(&mut tree);
        let b = sample_project(&mut tree);

        // Swap the two files of `b`: File([Module]) now comes second.
        let first = tree.files_mut(b).unwrap().remove_at(0).unwrap();
        tree.files_mut(b).unwrap().push(first).unwrap();

        assert_ne!(tree.project(a).unwrap(), tree.project(b).unwrap());
    }

    #[test]
    fn test_child_count_differences_compare_unequal() {
        let mut tree = IrTree::new();
        let a = sample_project(&mut tree);
        let b = sample_project(&mut tree);

        let extra = tree.new_file();
        tree.files_mut(b).unwrap().push(extra).unwrap();

        assert_ne!(tree.project(a).unwrap(), tree.project(b).unwrap());
    }

    #[test]
    fn test_modules_are_structurally_identical() {
        let mut tree = IrTree::new();
        let x = tree.new_module();
        let y = tree.new_module();

        assert_eq!(tree.module(x).unwrap(), tree.module(y).unwrap());
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::hash::{BuildHasher, RandomState};

        let mut tree = IrTree::new();
        let a = sample_project(&mut tree);
        let b = sample_project(&mut tree);

        let s = RandomState::new();
        assert_eq!(
            s.hash_one(tree.project(a).unwrap()),
            s.hash_one(tree.project(b).unwrap())
        );
    }

    #[test]
    fn test_upward_navigation() {
        let mut tree = IrTree::new();
        let project = sample_project(&mut tree);

        let module = tree.project(project).unwrap().file(0).unwrap().module(0).unwrap();
        let file = module.parent().unwrap();
        assert_eq!(file.id(), tree.project(project).unwrap().file(0).unwrap().id());
        assert_eq!(file.parent().unwrap().id(), project);
    }

    #[test]
    fn test_stale_handles_have_no_view() {
        let tree = IrTree::new();
        assert!(tree.project(ProjectId::new(0)).is_none());
        assert!(tree.file(FileId::new(0)).is_none());
        assert!(tree.module(ModuleId::new(0)).is_none());
    }
}
