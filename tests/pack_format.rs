use proptest::prelude::*;
use uidpack::primitives::pool;
use uidpack::{
    free_pack, intersect_compressed, Decoder, Encoder, Pack, SeekMode, Uid, UidError, PACK_MAGIC,
};

fn spaced(count: u64, step: u64) -> Vec<Uid> {
    (1..=count).map(|v| v * step).collect()
}

#[test]
fn parsed_pack_matches_encoded_pack() {
    let uids = spaced(5_000, 11);
    let pack = Pack::encode(&uids, 128);
    let parsed = Pack::from_bytes(&pack.to_bytes()).expect("parse");
    assert_eq!(parsed.block_size(), 128);
    assert_eq!(parsed.num_blocks(), pack.num_blocks());

    let other = spaced(10_000, 7);
    let mut from_encoded = Vec::new();
    let mut from_parsed = Vec::new();
    intersect_compressed(&pack, 500, &other, &mut from_encoded);
    intersect_compressed(&parsed, 500, &other, &mut from_parsed);
    assert_eq!(from_encoded, from_parsed);
    assert!(from_parsed.iter().all(|uid| uid % 77 == 0 && *uid > 500));

    free_pack(pack);
    free_pack(parsed);
}

#[test]
fn every_truncation_is_rejected() {
    let bytes = Pack::encode(&spaced(100, 3), 16).to_bytes();
    for len in 0..bytes.len() {
        let result = Pack::from_bytes(&bytes[..len]);
        assert!(
            matches!(result, Err(UidError::Corruption(_))),
            "prefix of {len} bytes parsed"
        );
    }
}

#[test]
fn trailing_garbage_is_rejected() {
    let mut bytes = Pack::encode(&spaced(10, 2), 4).to_bytes();
    bytes.push(0);
    assert!(Pack::from_bytes(&bytes).is_err());
}

#[test]
fn encoder_and_bulk_encode_serialize_identically() {
    let uids = spaced(777, 13);
    let mut enc = Encoder::new(32);
    enc.extend(uids.iter().copied());
    assert_eq!(enc.len(), uids.len());
    let streamed = enc.done();
    assert_eq!(streamed.to_bytes(), Pack::encode(&uids, 32).to_bytes());
}

#[test]
fn freed_buffers_are_reused_by_later_encodes() {
    for round in 0..8u64 {
        let uids = spaced(2_000, round + 1);
        let pack = Pack::encode(&uids, 64);
        assert_eq!(pack.to_vec(), uids);
        free_pack(pack);
        assert!(pool::shared().pooled() <= pool::MAX_POOLED_BUFFERS);
    }
}

#[test]
fn parsed_pack_is_shared_by_concurrent_readers() {
    let uids = spaced(30_000, 2);
    let parsed = Pack::from_bytes(&Pack::encode(&uids, 256).to_bytes()).expect("parse");
    std::thread::scope(|scope| {
        for start in [0u64, 1_000, 20_000, 59_999] {
            let parsed = &parsed;
            let uids = &uids;
            scope.spawn(move || {
                let mut dec = Decoder::new(parsed);
                dec.seek(start, SeekMode::FromStart);
                let tail: Vec<Uid> = dec.collect();
                let expected: Vec<Uid> = uids.iter().copied().filter(|&u| u > start).collect();
                assert_eq!(tail, expected);
            });
        }
    });
    free_pack(parsed);
}

proptest! {
    #[test]
    fn serialized_packs_roundtrip(
        uids in prop::collection::btree_set(any::<u64>(), 0..400),
        block_size in 1u32..64,
    ) {
        let uids: Vec<Uid> = uids.into_iter().collect();
        let pack = Pack::encode(&uids, block_size);
        let bytes = pack.to_bytes();
        prop_assert_eq!(&bytes[..PACK_MAGIC.len()], &PACK_MAGIC[..]);
        let parsed = Pack::from_bytes(&bytes).expect("parse");
        prop_assert_eq!(parsed.to_vec(), uids);
        prop_assert_eq!(parsed, pack);
    }

    #[test]
    fn single_byte_damage_is_detected(
        uids in prop::collection::btree_set(0u64..100_000, 1..200),
        position in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let uids: Vec<Uid> = uids.into_iter().collect();
        let mut bytes = Pack::encode(&uids, 16).to_bytes();
        let idx = position.index(bytes.len());
        bytes[idx] ^= mask;
        prop_assert!(matches!(Pack::from_bytes(&bytes), Err(UidError::Corruption(_))));
    }
}
