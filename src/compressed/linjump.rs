use crate::algebra::intersect_lin;
use crate::codec::Decoder;
use crate::types::Uid;

/// Multiset intersection of the decoder's remaining UIDs with `other`,
/// appending matches to `dst`.
///
/// For each unmatched candidate the decoder advances block by block until it
/// reaches the block that can hold it, then both sides are merged until that
/// block or `other` runs out. `other` may contain duplicates; the pack is
/// expected not to.
pub fn intersect_compressed_linjump(dec: &mut Decoder<'_>, other: &[Uid], dst: &mut Vec<Uid>) {
    let mut k = 0;
    while k < other.len() {
        let block = dec.linear_seek(other[k]);
        if block.is_empty() {
            break;
        }
        let (used, matched) = intersect_lin(block, &other[k..], dst);
        dec.consume(used);
        k += matched;
    }
}
