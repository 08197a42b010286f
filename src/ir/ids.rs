//! Node handles for the IR tree.
//!
//! Each node kind gets its own `u32` newtype so a file handle can never be
//! passed where a module handle is expected. Handles are assigned
//! sequentially per kind as nodes are allocated in the tree.
//!
//! Using handles instead of references throughout the tree:
//! - Makes comparisons O(1) and copies free
//! - Keeps parent back-references cycle-free
//! - Lets the borrow checker treat all node state as one `IrTree` value

use std::fmt;

use crate::base::IrId;

macro_rules! node_id {
    ($(#[$doc:meta])* $name:ident, $display:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a handle from a raw index.
            #[inline]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw index.
            #[inline]
            pub const fn index(self) -> u32 {
                self.0
            }
        }

        impl IrId for $name {
            #[inline]
            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            fn index(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($display, "#{}"), self.0)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            #[inline]
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

node_id! {
    /// Handle of a project node, the top of the IR tree.
    ProjectId, "project"
}

node_id! {
    /// Handle of a file node.
    ///
    /// A file belongs to at most one project at a time and owns an ordered
    /// list of modules.
    FileId, "file"
}

node_id! {
    /// Handle of a module node, the leaf level of the tree.
    ModuleId, "module"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        let a = FileId::new(1);
        let b = FileId::new(1);
        let c = FileId::new(2);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_id_size() {
        assert_eq!(std::mem::size_of::<ProjectId>(), 4);
        assert_eq!(std::mem::size_of::<FileId>(), 4);
        assert_eq!(std::mem::size_of::<ModuleId>(), 4);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ModuleId::new(3).to_string(), "module#3");
        assert_eq!(format!("{:?}", ProjectId::new(0)), "ProjectId(0)");
    }

    #[test]
    fn test_id_raw_roundtrip() {
        let id = ModuleId::from(7u32);
        assert_eq!(u32::from(id), 7);
    }
}
