use super::{is_sorted, is_strictly_sorted};
use crate::types::Uid;

/// Length ratio (longer / shorter) at which [`intersect_with`] stops merging
/// linearly and binary-searches the longer input instead.
pub const BINARY_RATIO: usize = 50;

/// Intersects any number of sorted sequences as sets.
///
/// The result holds each value present in every input exactly once. Inputs are
/// expected to be duplicate-free; duplicates are tolerated and collapsed. Short
/// circuits as soon as any input or partial result is empty.
pub fn intersect<S: AsRef<[Uid]>>(lists: &[S]) -> Vec<Uid> {
    let mut lists: Vec<&[Uid]> = lists.iter().map(AsRef::as_ref).collect();
    if lists.is_empty() || lists.iter().any(|list| list.is_empty()) {
        return Vec::new();
    }
    debug_assert!(
        lists.iter().all(|list| is_sorted(list)),
        "intersect inputs must be sorted"
    );
    lists.sort_by_key(|list| list.len());

    let mut acc = lists[0].to_vec();
    acc.dedup();
    let mut scratch = Vec::with_capacity(acc.len());
    for list in &lists[1..] {
        intersect_set_into(&acc, list, &mut scratch);
        std::mem::swap(&mut acc, &mut scratch);
        if acc.is_empty() {
            break;
        }
    }
    acc
}

/// Set intersection of a duplicate-free `acc` with `other`, written to `out`.
fn intersect_set_into(acc: &[Uid], other: &[Uid], out: &mut Vec<Uid>) {
    debug_assert!(is_strictly_sorted(acc));
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < acc.len() && j < other.len() {
        let (a, b) = (acc[i], other[j]);
        if a < b {
            i += 1;
        } else if a > b {
            j += 1;
        } else {
            out.push(a);
            i += 1;
            j += 1;
            while j < other.len() && other[j] == a {
                j += 1;
            }
        }
    }
}

/// Multiset intersection of `u` and `v` into `dst`.
///
/// A value present `cu` times in `u` and `cv` times in `v` appears
/// `min(cu, cv)` times in `dst`. `dst` is cleared first; use
/// [`intersect_in_place`] to store the result back into `u`.
pub fn intersect_with(u: &[Uid], v: &[Uid], dst: &mut Vec<Uid>) {
    debug_assert!(is_sorted(u) && is_sorted(v), "intersect_with inputs must be sorted");
    dst.clear();
    if u.is_empty() || v.is_empty() {
        return;
    }
    let (small, large) = if u.len() <= v.len() { (u, v) } else { (v, u) };
    if large.len() / small.len() < BINARY_RATIO {
        intersect_lin(u, v, dst);
    } else {
        intersect_bin(small, large, dst);
    }
}

/// Multiset intersection of `u` with `v`, overwriting `u` with the result.
///
/// Writes never overtake reads, so no scratch buffer is needed. `v` is not
/// touched; an empty `v` empties `u`.
pub fn intersect_in_place(u: &mut Vec<Uid>, v: &[Uid]) {
    debug_assert!(is_sorted(u) && is_sorted(v), "intersect_in_place inputs must be sorted");
    let (mut read, mut write, mut j) = (0, 0, 0);
    while read < u.len() && j < v.len() {
        let (a, b) = (u[read], v[j]);
        if a < b {
            read += 1;
        } else if a > b {
            j += 1;
        } else {
            u[write] = a;
            write += 1;
            read += 1;
            j += 1;
        }
    }
    u.truncate(write);
}

/// Two-pointer multiset intersection appending to `dst`.
///
/// Stops as soon as either side runs out and returns how many elements of `u`
/// and `v` were consumed.
pub(crate) fn intersect_lin(u: &[Uid], v: &[Uid], dst: &mut Vec<Uid>) -> (usize, usize) {
    let (mut i, mut j) = (0, 0);
    while i < u.len() && j < v.len() {
        let (a, b) = (u[i], v[j]);
        if a < b {
            i += 1;
        } else if a > b {
            j += 1;
        } else {
            dst.push(a);
            i += 1;
            j += 1;
        }
    }
    (i, j)
}

/// Walks `small` and binary-searches forward through `large`, appending matches.
fn intersect_bin(small: &[Uid], large: &[Uid], dst: &mut Vec<Uid>) {
    let mut off = 0;
    for &uid in small {
        off += large[off..].partition_point(|&candidate| candidate < uid);
        match large.get(off) {
            None => return,
            Some(&found) if found == uid => {
                dst.push(uid);
                off += 1;
            }
            Some(_) => {}
        }
    }
}
