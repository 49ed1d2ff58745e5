use crate::codec::Decoder;
use crate::types::Uid;

/// Multiset intersection of the decoder's remaining UIDs with `other` using
/// binary search, appending matches to `dst`.
///
/// When `other` is the shorter side each candidate binary-searches the block
/// bases for its block and then the block itself. Otherwise the pack is walked
/// block by block and every member binary-searches forward through `other`.
/// Results are unspecified when the pack holds duplicate UIDs.
pub fn intersect_compressed_bin(dec: &mut Decoder<'_>, other: &[Uid], dst: &mut Vec<Uid>) {
    if dec.is_exhausted() || other.is_empty() {
        return;
    }
    if dec.approx_len() < other.len() {
        walk_pack(dec, other, dst);
    } else {
        probe_pack(dec, other, dst);
    }
}

fn probe_pack(dec: &mut Decoder<'_>, other: &[Uid], dst: &mut Vec<Uid>) {
    for &uid in other {
        let Some(&found) = dec.binary_seek(uid).first() else {
            return;
        };
        if found == uid {
            dst.push(uid);
            dec.consume(1);
        }
    }
}

fn walk_pack(dec: &mut Decoder<'_>, mut other: &[Uid], dst: &mut Vec<Uid>) {
    loop {
        let block = dec.block_uids();
        if block.is_empty() {
            return;
        }
        let used = block.len();
        for &uid in block {
            let idx = other.partition_point(|&candidate| candidate < uid);
            match other.get(idx) {
                None => return,
                Some(&found) if found == uid => {
                    dst.push(uid);
                    other = &other[idx + 1..];
                }
                Some(_) => other = &other[idx..],
            }
        }
        dec.consume(used);
    }
}
