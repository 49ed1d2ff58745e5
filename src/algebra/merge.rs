use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::is_sorted;
use crate::types::Uid;

/// Unions any number of sorted sequences into a strictly ascending set.
///
/// Each value that appears in at least one input appears exactly once in the
/// output, no matter how often it repeats within or across inputs. Runs in
/// `O(N log k)` using a min-heap keyed by `(value, source)`.
pub fn merge<S: AsRef<[Uid]>>(lists: &[S]) -> Vec<Uid> {
    let lists: Vec<&[Uid]> = lists
        .iter()
        .map(AsRef::as_ref)
        .filter(|list| !list.is_empty())
        .collect();
    debug_assert!(
        lists.iter().all(|list| is_sorted(list)),
        "merge inputs must be sorted"
    );

    match lists.len() {
        0 => return Vec::new(),
        1 => {
            let mut out = lists[0].to_vec();
            out.dedup();
            return out;
        }
        _ => {}
    }

    let total: usize = lists.iter().map(|list| list.len()).sum();
    let mut out = Vec::with_capacity(total);
    let mut positions = vec![0usize; lists.len()];
    let mut heap = BinaryHeap::with_capacity(lists.len());
    for (source, list) in lists.iter().enumerate() {
        heap.push(Reverse((list[0], source)));
    }

    while let Some(Reverse((value, source))) = heap.pop() {
        if out.last() != Some(&value) {
            out.push(value);
        }
        let list = lists[source];
        let mut pos = positions[source];
        while pos < list.len() && list[pos] == value {
            pos += 1;
        }
        positions[source] = pos;
        if let Some(&head) = list.get(pos) {
            heap.push(Reverse((head, source)));
        }
    }
    out
}
