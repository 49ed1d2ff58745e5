use crate::types::Uid;

/// Retains the elements of `uids` for which `keep(uid, index)` returns true.
///
/// `index` is the element's position in the sequence before filtering, so the
/// predicate can consult data kept in a parallel array. Indices are visited in
/// ascending order, each exactly once.
pub fn apply_filter<F>(uids: &mut Vec<Uid>, mut keep: F)
where
    F: FnMut(Uid, usize) -> bool,
{
    let mut write = 0;
    for index in 0..uids.len() {
        let uid = uids[index];
        if keep(uid, index) {
            uids[write] = uid;
            write += 1;
        }
    }
    uids.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_odd_values() {
        let mut uids = vec![1, 2, 3, 4, 5];
        apply_filter(&mut uids, |uid, _| uid % 2 == 1);
        assert_eq!(uids, vec![1, 3, 5]);
    }

    #[test]
    fn filter_sees_original_indices() {
        let facets = ["keep", "drop", "drop", "keep"];
        let mut uids = vec![10, 20, 30, 40];
        let mut seen = Vec::new();
        apply_filter(&mut uids, |_, idx| {
            seen.push(idx);
            facets[idx] == "keep"
        });
        assert_eq!(uids, vec![10, 40]);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_everything_out() {
        let mut uids = vec![7, 8];
        apply_filter(&mut uids, |_, _| false);
        assert!(uids.is_empty());
    }
}
