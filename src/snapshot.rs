use serde::{Deserialize, Serialize};

use crate::avl::AvlTree;
use crate::node::Link;

///Which child slot of the parent a node hangs off
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Left,
    Right,
}

///One (key, parent, relation) triple; the root carries neither parent nor
///relation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SnapshotEntry<K> {
    pub key: K,
    pub parent: Option<K>,
    pub relation: Option<Relation>,
}

///Read-only copy of a tree's shape, listed in pre-order. Enough for any
///external renderer to redraw the layout without reaching into node links.
///Captured freshly on demand and never retained by the engine.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Snapshot<K> {
    entries: Vec<SnapshotEntry<K>>,
}

impl<K: Clone> Snapshot<K> {
    ///Copies the shape of the tree behind a root link
    pub fn capture(root: &Link<K>) -> Snapshot<K> {
        let mut entries = Vec::new();
        Self::visit(root, None, &mut entries);
        Snapshot { entries }
    }

    fn visit(link: &Link<K>, parent: Option<(&K, Relation)>, entries: &mut Vec<SnapshotEntry<K>>) {
        if let Some(node) = link {
            entries.push(SnapshotEntry {
                key: node.key.clone(),
                parent: parent.map(|(key, _)| key.clone()),
                relation: parent.map(|(_, relation)| relation),
            });
            Self::visit(&node.left, Some((&node.key, Relation::Left)), entries);
            Self::visit(&node.right, Some((&node.key, Relation::Right)), entries);
        }
    }
}

//read accessors need no bounds; only capturing clones keys
impl<K> Snapshot<K> {
    pub fn entries(&self) -> &[SnapshotEntry<K>] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    ///Key of the tree root, if the tree was non-empty
    pub fn root_key(&self) -> Option<&K> {
        self.entries.first().map(|entry| &entry.key)
    }
}

///External collaborator fed a fresh shape snapshot after every insertion
///step. Rendering and display live behind this seam, outside the engine.
pub trait TreeObserver<K> {
    fn on_insert(&mut self, step: usize, key: &K, snapshot: &Snapshot<K>);
}

///Builds an AVL tree one key at a time, handing the observer a snapshot
///after each step. Steps are numbered from 1.
pub fn build_avl<K, O>(keys: impl IntoIterator<Item = K>, observer: &mut O) -> AvlTree<K>
where
    K: Ord + Clone,
    O: TreeObserver<K>,
{
    let mut tree = AvlTree::new();
    for (index, key) in keys.into_iter().enumerate() {
        let inserted = key.clone();
        tree.insert(key);
        observer.on_insert(index + 1, &inserted, &Snapshot::capture(tree.root()));
    }
    tree
}
