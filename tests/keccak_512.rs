use keccak::Keccak512;
use proptest::prelude::*;

const RATE_BYTES: usize = 72;

fn digest(msg: &[u8]) -> [u8; 64] {
    Keccak512::new().update(msg).unwrap().digest().unwrap()
}

#[test]
fn empty_input_matches_published_vector() {
    assert_eq!(
        hex::encode(digest(b"")),
        "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
    );
}

#[test]
fn padding_boundaries_are_internally_consistent() {
    for len in [RATE_BYTES - 1, RATE_BYTES, RATE_BYTES + 1] {
        let msg = vec![0x7fu8; len];
        assert_eq!(digest(&msg), digest(&msg), "len {len} is not deterministic");
    }
}

proptest! {
    #[test]
    fn streaming_equivalence_holds_for_arbitrary_splits(
        a in prop::collection::vec(any::<u8>(), 0..300),
        b in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut combined = a.clone();
        combined.extend_from_slice(&b);

        let mut split = Keccak512::new();
        split.update(&a).unwrap();
        split.update(&b).unwrap();

        let mut whole = Keccak512::new();
        whole.update(&combined).unwrap();

        prop_assert_eq!(split.digest().unwrap(), whole.digest().unwrap());
    }
}
