//! Set algebra over materialized, ascending UID sequences.
//!
//! Every function here treats its inputs as sorted ascending. Sortedness is a
//! caller obligation and is only checked in debug builds.

mod difference;
mod filter;
mod intersect;
mod merge;

pub use difference::difference;
pub use filter::apply_filter;
pub use intersect::{intersect, intersect_in_place, intersect_with, BINARY_RATIO};
pub(crate) use intersect::intersect_lin;
pub use merge::merge;

use crate::types::Uid;

/// Returns true when `uids` is ascending (duplicates allowed).
pub fn is_sorted(uids: &[Uid]) -> bool {
    uids.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Returns true when `uids` is strictly ascending.
pub fn is_strictly_sorted(uids: &[Uid]) -> bool {
    uids.windows(2).all(|pair| pair[0] < pair[1])
}

/// Position of the first occurrence of `uid` in `uids`, if present.
pub fn index_of(uids: &[Uid], uid: Uid) -> Option<usize> {
    debug_assert!(is_sorted(uids), "index_of input must be sorted");
    let idx = uids.partition_point(|&candidate| candidate < uid);
    match uids.get(idx) {
        Some(&found) if found == uid => Some(idx),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortedness_checks() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_strictly_sorted(&[1, 1, 2]));
        assert!(is_strictly_sorted(&[1, 2, 9]));
        assert!(!is_sorted(&[3, 2]));
    }

    #[test]
    fn index_of_finds_first_occurrence() {
        let uids = [2, 4, 4, 4, 9];
        assert_eq!(index_of(&uids, 4), Some(1));
        assert_eq!(index_of(&uids, 9), Some(4));
        assert_eq!(index_of(&uids, 5), None);
        assert_eq!(index_of(&uids, 100), None);
        assert_eq!(index_of(&[], 1), None);
    }
}
