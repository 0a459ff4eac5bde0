pub mod avl;
pub mod bst;
pub mod node;
pub mod snapshot;

pub use avl::AvlTree;
pub use bst::BstTree;
pub use snapshot::{build_avl, Relation, Snapshot, SnapshotEntry, TreeObserver};
