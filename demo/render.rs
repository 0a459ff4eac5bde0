use std::fmt::Display;

use avl_engine::{Relation, Snapshot, SnapshotEntry};

///Per-node child slots rebuilt from the snapshot, indexed by entry position
struct Shape {
    left: Option<usize>,
    right: Option<usize>,
}

///Draws a snapshot as an indented tree with branch guides, working only from
///the (key, parent, relation) triples.
pub fn render<K: Display + PartialEq>(snapshot: &Snapshot<K>) -> String {
    let entries = snapshot.entries();
    let Some(root) = entries.first() else {
        return "(empty tree)".to_string();
    };

    let shape = rebuild_shape(entries);
    let mut out = format!("{}\n", root.key);
    write_children(entries, &shape, 0, "", &mut out);
    out
}

///Reattaches every entry to its parent. Entries arrive in pre-order, so the
///parent of an entry is the deepest node still on the descent stack whose key
///matches and whose recorded child slot is free; matching by key alone would
///loop on duplicate keys.
fn rebuild_shape<K: PartialEq>(entries: &[SnapshotEntry<K>]) -> Vec<Shape> {
    let mut shape: Vec<Shape> = entries
        .iter()
        .map(|_| Shape {
            left: None,
            right: None,
        })
        .collect();

    let mut stack: Vec<usize> = vec![0];
    for (index, entry) in entries.iter().enumerate().skip(1) {
        while let Some(&candidate) = stack.last() {
            let key_matches = entry.parent.as_ref() == Some(&entries[candidate].key);
            let slot_free = match entry.relation {
                Some(Relation::Left) => shape[candidate].left.is_none(),
                Some(Relation::Right) => shape[candidate].right.is_none(),
                None => false,
            };
            if key_matches && slot_free {
                break;
            }
            stack.pop();
        }
        let Some(&parent) = stack.last() else { break };
        match entry.relation {
            Some(Relation::Left) => shape[parent].left = Some(index),
            Some(Relation::Right) => shape[parent].right = Some(index),
            None => {}
        }
        stack.push(index);
    }
    shape
}

fn write_children<K: Display>(
    entries: &[SnapshotEntry<K>],
    shape: &[Shape],
    index: usize,
    tab: &str,
    out: &mut String,
) {
    let children: Vec<(Relation, usize)> = [
        (Relation::Left, shape[index].left),
        (Relation::Right, shape[index].right),
    ]
    .into_iter()
    .filter_map(|(side, child)| child.map(|child| (side, child)))
    .collect();

    let last = children.len().saturating_sub(1);
    for (position, &(side, child)) in children.iter().enumerate() {
        let is_last = position == last;
        let branch = if is_last { "└─" } else { "├─" };
        let label = match side {
            Relation::Left => "L",
            Relation::Right => "R",
        };
        out.push_str(&format!("{tab}{branch} {label} {}\n", entries[child].key));

        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        write_children(entries, shape, child, &child_tab, out);
    }
}
