//! KECCAK sponge construction with an incremental absorb/squeeze API.
//!
//! Padding here is the *original* Keccak multirate padding (`10*1`, byte
//! pattern `0x01 .. 0x80`, or `0x81` when a single pad byte suffices) and
//! carries no SHA-3 domain separation bits.
use crate::permute::State;

/// Suffix XORed into the state as the first step of multirate padding.
///
/// Original Keccak appends no domain-separation bits before the `10*1`
/// padding, so this is just the lone leading `1` bit of the pad pattern.
const PAD_FIRST_BYTE: u8 = 0x01;
/// The trailing `1` bit of the `10*1` pad pattern, always in the last byte
/// of the rate block.
const PAD_LAST_BYTE: u8 = 0b1000_0000;

/// Absorbs bytes into the Keccakf[1600] state.
pub(crate) struct Absorbing<const RATE_BYTES: usize> {
    pos: usize,
    state: State<RATE_BYTES>,
}

impl<const RATE_BYTES: usize> Absorbing<RATE_BYTES> {
    pub(crate) fn new() -> Self {
        Self {
            state: State::new(),
            pos: 0,
        }
    }

    pub(crate) fn absorb(&mut self, msg: &[u8]) {
        // first, we handle a potentially partial block, either due to an advanced
        // position or msg.len() < RATE_BYTES
        let partial_block_len = (RATE_BYTES - self.pos).min(msg.len());
        let (first_msg, rest_msg) = msg.split_at(partial_block_len);
        self.state.xor_bytes_at(self.pos, first_msg);
        // if the state was filled, we permute and reset the position
        if self.pos + partial_block_len == RATE_BYTES {
            self.state.keccakf_1600_permute();
            self.pos = 0;
        } else {
            // otherwise, we increment the position.
            self.pos += partial_block_len;
            // this branch is only taken if self.pos + partial_block_len < RATE_BYTES, so
            // we know that rest_msg.is_empty() and can safely return
            debug_assert!(rest_msg.is_empty());
            return;
        }

        // Absorb the remaining message
        let (chunks, rest) = rest_msg.as_chunks::<RATE_BYTES>();
        for chunk in chunks {
            self.state.xor_bytes(chunk);
            self.state.keccakf_1600_permute();
        }
        self.pos = rest.len();
        self.state.xor_bytes(rest);
    }

    /// Consume the absorbing state, apply multirate padding (original
    /// Keccak: no domain-separation bits, just `10*1`) to the residual
    /// buffer, and return a [`Squeezing`] ready to emit output.
    ///
    /// Note that this performs no permute! We define the squeezing phase to
    /// start with a permutation (instead of ending the absorption with one);
    /// the padded block is only actually run through Keccak-f on the first
    /// call to [`Squeezing::squeeze`].
    pub(crate) fn into_squeeze(mut self) -> Squeezing<RATE_BYTES> {
        self.state.xor_byte_at(self.pos, PAD_FIRST_BYTE);
        self.state.xor_byte_at(RATE_BYTES - 1, PAD_LAST_BYTE);
        Squeezing::new(self.state)
    }
}

/// Squeezes bytes out of the Keccakf[1600] state.
pub(crate) struct Squeezing<const RATE_BYTES: usize> {
    pos: usize,
    state: State<RATE_BYTES>,
}

impl<const RATE_BYTES: usize> Squeezing<RATE_BYTES> {
    fn new(state: State<RATE_BYTES>) -> Self {
        Self { pos: 0, state }
    }

    pub(crate) fn squeeze(&mut self, output: &mut [u8]) {
        if output.is_empty() {
            return;
        }

        if self.pos == 0 {
            self.state.keccakf_1600_permute();
        }
        let partial_block_len = (RATE_BYTES - self.pos).min(output.len());
        let (first_output, rest_output) = output.split_at_mut(partial_block_len);
        self.state.read_bytes_at(self.pos, first_output);
        self.pos = (self.pos + partial_block_len) % RATE_BYTES;
        if rest_output.is_empty() {
            return;
        }

        let (chunks, rest) = rest_output.as_chunks_mut::<RATE_BYTES>();
        for chunk in chunks {
            self.state.keccakf_1600_permute();
            self.state.read_bytes(chunk);
        }
        if !rest.is_empty() {
            self.state.keccakf_1600_permute();
            self.state.read_bytes(rest);
        }
        self.pos = rest.len();
    }
}
