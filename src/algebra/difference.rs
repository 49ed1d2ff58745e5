use super::is_sorted;
use crate::types::Uid;

/// Values of `a` not matched by `b`, keeping order.
///
/// Each occurrence in `b` cancels at most one equal occurrence in `a`, so a
/// value present `ca` times in `a` and `cb` times in `b` survives
/// `ca - min(ca, cb)` times.
pub fn difference(a: &[Uid], b: &[Uid]) -> Vec<Uid> {
    debug_assert!(is_sorted(a) && is_sorted(b), "difference inputs must be sorted");
    if b.is_empty() {
        return a.to_vec();
    }
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        let Some(&head) = b.get(j) else {
            out.extend_from_slice(&a[i..]);
            break;
        };
        let uid = a[i];
        if uid < head {
            out.push(uid);
            i += 1;
        } else if uid > head {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_single_removals() {
        assert_eq!(difference(&[1, 2, 3], &[1]), vec![2, 3]);
        assert_eq!(difference(&[1, 2, 3], &[2]), vec![1, 3]);
        assert_eq!(difference(&[1, 2, 3], &[3]), vec![1, 2]);
    }

    #[test]
    fn difference_empty_sides() {
        assert_eq!(difference(&[1, 2, 3], &[]), vec![1, 2, 3]);
        assert!(difference(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn difference_overlapping_ranges() {
        assert_eq!(difference(&[1, 2, 3], &[2, 3, 4, 5]), vec![1]);
        assert_eq!(difference(&[10, 12, 13], &[2, 3, 4, 13]), vec![10, 12]);
        assert!(difference(&[4, 5, 6], &[4, 5, 6]).is_empty());
    }

    #[test]
    fn difference_counts_occurrences() {
        assert_eq!(difference(&[1, 1, 1, 2], &[1]), vec![1, 1, 2]);
        assert_eq!(difference(&[1, 1, 2], &[1, 1, 1, 2]), Vec::<Uid>::new());
    }
}
