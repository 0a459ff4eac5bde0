use crate::node::{collect_in_order, Link, TreeNode};

///Plain binary search tree with no rebalancing. Kept as the "before" state
///next to [`AvlTree`](crate::avl::AvlTree): same node layout, same descent,
///same tie-break, just no rotation step, so sorted input degenerates into a
///chain. Heights are not maintained in this mode.
#[derive(Debug, Default, PartialEq)]
pub struct BstTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord + Clone> BstTree<K> {
    ///Creates a new empty tree
    pub fn new() -> BstTree<K> {
        BstTree { root: None, len: 0 }
    }
    ///Returns number of elements in tree
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn root(&self) -> &Link<K> {
        &self.root
    }

    ///Inserts key as a new leaf. Duplicates go right, same as the AVL mode.
    pub fn insert(&mut self, key: K) {
        Self::insert_into(&mut self.root, key);
        self.len += 1;
    }

    fn insert_into(subtree: &mut Link<K>, key: K) {
        match subtree {
            None => *subtree = Some(Box::new(TreeNode::new(key))),
            Some(node) => {
                if key < *node.key() {
                    Self::insert_into(&mut node.left, key);
                } else {
                    Self::insert_into(&mut node.right, key);
                }
            }
        }
    }

    ///Keys in sorted order
    pub fn in_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        collect_in_order(&self.root, &mut keys);
        keys
    }
}
