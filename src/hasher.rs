//! The streaming hash façade: the four fixed Keccak presets plus a
//! runtime-parameterized general constructor.
use std::mem;

use crate::{
    error::{KeccakError, SUPPORTED_STATE_BITS},
    sponge::Absorbing,
};

/// A Keccak sponge instance with a fixed rate, generic over `RATE_BYTES`.
///
/// `RATE_BYTES` must be one of 144, 136, 104 or 72 (the four rates used by
/// the shipped presets) — [`crate::sponge::Absorbing::new`] enforces this.
/// `digest_bytes` is the truncation length applied to the squeezed output
/// and is a runtime value so a single generic type can back presets with
/// different output sizes built on the same rate; the general
/// [`KeccakHash`] constructor relies on this.
pub(crate) struct Keccak<const RATE_BYTES: usize> {
    phase: Phase<RATE_BYTES>,
    digest_bytes: usize,
}

/// The hash instance's phase: absorbing input, or terminal after `digest()`.
///
/// Unlike [`crate::sponge::Squeezing`], there is no externally visible
/// squeezing phase — `digest()` drives padding and squeezing in one call
/// and immediately becomes [`Phase::Terminal`], since this crate has no
/// incremental squeeze API (spec non-goal).
enum Phase<const RATE_BYTES: usize> {
    Absorbing(Absorbing<RATE_BYTES>),
    Terminal,
}

impl<const RATE_BYTES: usize> Keccak<RATE_BYTES> {
    fn new(digest_bytes: usize) -> Self {
        Self {
            phase: Phase::Absorbing(Absorbing::new()),
            digest_bytes,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<(), KeccakError> {
        match &mut self.phase {
            Phase::Absorbing(absorbing) => {
                absorbing.absorb(data);
                Ok(())
            }
            Phase::Terminal => Err(KeccakError::Finalized),
        }
    }

    fn digest(&mut self) -> Result<Vec<u8>, KeccakError> {
        match mem::replace(&mut self.phase, Phase::Terminal) {
            Phase::Absorbing(absorbing) => {
                let mut squeeze = absorbing.into_squeeze();
                let mut output = vec![0u8; self.digest_bytes];
                squeeze.squeeze(&mut output);
                Ok(output)
            }
            Phase::Terminal => Err(KeccakError::Finalized),
        }
    }
}

/// Defines a fixed-parameter Keccak preset as a thin newtype over
/// [`Keccak`], with a stack-allocated, known-size digest.
macro_rules! preset {
    ($(#[$doc:meta])* $name:ident, rate_bytes = $rate:expr, output_bytes = $out:expr) => {
        $(#[$doc])*
        pub struct $name(Keccak<{ $rate }>);

        impl $name {
            /// Creates a fresh instance with a zeroed state and empty buffer.
            pub fn new() -> Self {
                Self(Keccak::new($out))
            }

            /// Absorbs `data` into the sponge. May be called any number of
            /// times, including with empty input, before [`Self::digest`].
            ///
            /// Fails with [`KeccakError::Finalized`] if `digest` has already
            /// been called on this instance.
            pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, KeccakError> {
                self.0.update(data)?;
                Ok(self)
            }

            /// Pads, squeezes, and returns the fixed-size digest, consuming
            /// the remaining input buffer and finalizing the instance.
            /// Subsequent calls fail with [`KeccakError::Finalized`].
            pub fn digest(&mut self) -> Result<[u8; $out], KeccakError> {
                let bytes = self.0.digest()?;
                let mut out = [0u8; $out];
                out.copy_from_slice(&bytes);
                Ok(out)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

preset!(
    /// Keccak-224: rate 1152 bits / capacity 448 bits, 224-bit (28-byte)
    /// digest. Original Keccak padding, not SHA-3.
    Keccak224,
    rate_bytes = 144,
    output_bytes = 28
);
preset!(
    /// Keccak-256: rate 1088 bits / capacity 512 bits, 256-bit (32-byte)
    /// digest. Original Keccak padding, not SHA-3.
    Keccak256,
    rate_bytes = 136,
    output_bytes = 32
);
preset!(
    /// Keccak-384: rate 832 bits / capacity 768 bits, 384-bit (48-byte)
    /// digest. Original Keccak padding, not SHA-3.
    Keccak384,
    rate_bytes = 104,
    output_bytes = 48
);
preset!(
    /// Keccak-512: rate 576 bits / capacity 1024 bits, 512-bit (64-byte)
    /// digest. Original Keccak padding, not SHA-3.
    Keccak512,
    rate_bytes = 72,
    output_bytes = 64
);

/// A Keccak hash instance parameterized at runtime by `(rate_bits,
/// capacity_bits, output_bits)`, for callers that don't know their preset at
/// compile time.
///
/// This crate carries no general-purpose lane-width or arbitrary-rate
/// permutation (see the crate's Non-goals); [`KeccakHash::new`] accepts any
/// `rate_bits`/`capacity_bits` combination that is a valid Keccak state
/// width, but can only actually construct an instance when the resulting
/// rate matches one of the four shipped presets. Prefer [`Keccak224`],
/// [`Keccak256`], [`Keccak384`], or [`Keccak512`] directly when the preset
/// is known ahead of time.
pub enum KeccakHash {
    Rate144(Keccak<144>),
    Rate136(Keccak<136>),
    Rate104(Keccak<104>),
    Rate72(Keccak<72>),
}

impl KeccakHash {
    /// Validates `(rate_bits, capacity_bits, output_bits)` against spec and
    /// constructs a fresh instance.
    #[cfg_attr(feature = "tracing", tracing::instrument)]
    pub fn new(
        rate_bits: usize,
        capacity_bits: usize,
        output_bits: usize,
    ) -> Result<Self, KeccakError> {
        let sum = rate_bits + capacity_bits;
        if !SUPPORTED_STATE_BITS.contains(&sum) {
            return Err(KeccakError::InvalidStateSize {
                rate_bits,
                capacity_bits,
                sum,
            });
        }
        if rate_bits % 8 != 0 {
            return Err(KeccakError::UnalignedRate { rate_bits });
        }
        if output_bits % 8 != 0 {
            return Err(KeccakError::UnalignedOutput { output_bits });
        }

        let digest_bytes = output_bits / 8;
        let hash = match rate_bits / 8 {
            144 => KeccakHash::Rate144(Keccak::new(digest_bytes)),
            136 => KeccakHash::Rate136(Keccak::new(digest_bytes)),
            104 => KeccakHash::Rate104(Keccak::new(digest_bytes)),
            72 => KeccakHash::Rate72(Keccak::new(digest_bytes)),
            _ => return Err(KeccakError::UnsupportedRate { rate_bits }),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(rate_bits, capacity_bits, output_bits, "constructed KeccakHash");

        Ok(hash)
    }

    /// Absorbs `data` into the sponge. Fails with [`KeccakError::Finalized`]
    /// if `digest` has already been called on this instance.
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, KeccakError> {
        match self {
            KeccakHash::Rate144(k) => k.update(data)?,
            KeccakHash::Rate136(k) => k.update(data)?,
            KeccakHash::Rate104(k) => k.update(data)?,
            KeccakHash::Rate72(k) => k.update(data)?,
        }
        Ok(self)
    }

    /// Pads, squeezes, and returns the digest, finalizing the instance.
    pub fn digest(&mut self) -> Result<Vec<u8>, KeccakError> {
        match self {
            KeccakHash::Rate144(k) => k.digest(),
            KeccakHash::Rate136(k) => k.digest(),
            KeccakHash::Rate104(k) => k.digest(),
            KeccakHash::Rate72(k) => k.digest(),
        }
    }
}
