//! Error types for construction-time and use-after-finalize failures.
//!
//! All of these are precondition failures (spec category, not transient
//! faults): invalid construction parameters, or driving a hash instance past
//! its single `digest()` call. None are retryable.
use thiserror::Error;

/// The set of Keccak state sizes (`rate_bits + capacity_bits`) the sponge
/// construction is defined for.
pub(crate) const SUPPORTED_STATE_BITS: [usize; 7] = [25, 50, 100, 200, 400, 800, 1600];

/// Fatal, non-retryable errors raised by [`crate::Keccak224`] and friends.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeccakError {
    /// `rate_bits + capacity_bits` is not one of the seven Keccak state
    /// widths (25, 50, 100, 200, 400, 800, 1600 bits).
    #[error(
        "rate_bits ({rate_bits}) + capacity_bits ({capacity_bits}) = {sum} is not a supported \
         Keccak state size (must be one of {SUPPORTED_STATE_BITS:?})"
    )]
    InvalidStateSize {
        rate_bits: usize,
        capacity_bits: usize,
        sum: usize,
    },

    /// `rate_bits` is not a whole number of bytes.
    #[error("rate_bits ({rate_bits}) must be a multiple of 8")]
    UnalignedRate { rate_bits: usize },

    /// `output_bits` is not a whole number of bytes.
    #[error("output_bits ({output_bits}) must be a multiple of 8")]
    UnalignedOutput { output_bits: usize },

    /// The requested rate is a valid Keccak[1600] rate in principle, but this
    /// crate only ships fixed-size permutation code for the four named
    /// presets (Keccak-224/256/384/512); no runtime-parameterized lane width
    /// or arbitrary rate is supported.
    #[error(
        "rate_bits ({rate_bits}) is not one of the four supported Keccak presets \
         (1152, 1088, 832, 576)"
    )]
    UnsupportedRate { rate_bits: usize },

    /// `update` or `digest` was called on an instance whose `digest()` has
    /// already run. A hash instance is single-shot.
    #[error("hash instance was already finalized by a previous digest() call")]
    Finalized,
}
