//! Pure Rust Keccak sponge construction and the four Keccak-224/256/384/512
//! hash functions.
//!
//! This implements the *original* Keccak multirate padding (the `10*1`
//! pattern with no domain-separation bits), not the SHA-3 variant that
//! prepends `0x06`/`0x1F` before padding. If you need SHA-3, use a crate
//! that implements FIPS 202 instead.
//!
//! ```
//! use keccak::Keccak256;
//!
//! let mut hash = Keccak256::new();
//! hash.update(b"abc").unwrap();
//! let digest = hash.digest().unwrap();
//! assert_eq!(
//!     hex::encode(digest),
//!     "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
//! );
//! ```
#![forbid(unsafe_code)]

mod error;
mod hasher;
mod permute;
mod sponge;

pub use error::KeccakError;
pub use hasher::{Keccak224, Keccak256, Keccak384, Keccak512, KeccakHash};

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_hex_224(msg: &[u8]) -> String {
        hex::encode(Keccak224::new().update(msg).unwrap().digest().unwrap())
    }
    fn digest_hex_256(msg: &[u8]) -> String {
        hex::encode(Keccak256::new().update(msg).unwrap().digest().unwrap())
    }
    fn digest_hex_384(msg: &[u8]) -> String {
        hex::encode(Keccak384::new().update(msg).unwrap().digest().unwrap())
    }
    fn digest_hex_512(msg: &[u8]) -> String {
        hex::encode(Keccak512::new().update(msg).unwrap().digest().unwrap())
    }

    #[test]
    fn keccak_256_empty() {
        assert_eq!(
            digest_hex_256(b""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak_256_abc() {
        assert_eq!(
            digest_hex_256(b"abc"),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn keccak_512_empty() {
        assert_eq!(
            digest_hex_512(b""),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
    }

    #[test]
    fn keccak_224_empty() {
        assert_eq!(
            digest_hex_224(b""),
            "f71837502ba8e10837bdd8d365adb85591895602fc552b48b7390abd"
        );
    }

    #[test]
    fn keccak_384_empty() {
        assert_eq!(
            digest_hex_384(b""),
            "2c23146a63a29acf99e73b88f8c24eaa7dc60aa771780ccc006afbfa8fe2479b2dd2b21362337441ac12b515911957ff"
        );
    }

    #[test]
    fn streaming_split_matches_single_update() {
        let mut split = Keccak256::new();
        split.update(b"ab").unwrap();
        split.update(b"c").unwrap();
        assert_eq!(
            hex::encode(split.digest().unwrap()),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn block_aligned_input_exercises_full_extra_pad_block() {
        // 136 zero bytes exactly fills Keccak-256's rate, so `absorb_final`
        // sees an empty residual buffer and must append a full extra
        // padding block (p == rate_bytes branch).
        let input = vec![0u8; 136];
        let a = digest_hex_256(&input);
        let b = digest_hex_256(&input);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn use_after_finalize_fails_distinguishably() {
        let mut hash = Keccak256::new();
        hash.digest().unwrap();
        assert_eq!(hash.update(b"x").unwrap_err(), KeccakError::Finalized);
        assert_eq!(hash.digest().unwrap_err(), KeccakError::Finalized);
    }

    #[test]
    fn digest_is_pure_function_of_input() {
        for msg in [&b""[..], b"abc", b"the quick brown fox"] {
            assert_eq!(digest_hex_256(msg), digest_hex_256(msg));
        }
    }
}
