// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fast xorshift random generator used for shuffling.
//!
//! This is a 64 bits state xorshift generator, it is fast and allocation free
//! but it is not cryptographically secure and must not be used where the
//! shuffle must be unpredictable.
use rand::{RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Xorshift random number generator with two 32 bits words of state.
#[derive(Debug, Clone)]
pub struct XorShift {
    s0: u32,
    s1: u32,
}

impl XorShift {
    /// Creates a generator from two seed words.
    ///
    /// A zero word would collapse the state, so zero is replaced with a fixed
    /// non zero default.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            s0: if a == 0 { 1 } else { a },
            s1: if b == 0 { 2 } else { b },
        }
    }

    /// Creates a generator seeded from the wall clock.
    ///
    /// Two generators created at different milliseconds produce different
    /// sequences, no determinism across runs is implied.
    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        // Only the low 32 bits of the clock change between runs.
        let now = millis as u32;
        Self::new(now ^ 0xDEAD, (now >> 4) ^ 0xBEEF)
    }

    /// Returns a value in `0..n`.
    ///
    /// This is `next_u32() % n` and is slightly biased for n that is not a power
    /// of two, the bias is negligible for the small n used to shuffle a deck.
    ///
    /// Panics if n is zero.
    #[inline]
    pub fn bounded(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

impl Default for XorShift {
    fn default() -> Self {
        Self::new(0x1234_5678, 0x9ABC_DEF0)
    }
}

impl RngCore for XorShift {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut a = self.s0;
        let b = self.s1;
        self.s0 = b;

        a ^= a << 23;
        a ^= a >> 17;
        a ^= b;
        a ^= b >> 26;

        self.s1 = a;
        a.wrapping_add(b)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for XorShift {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let [a0, a1, a2, a3, b0, b1, b2, b3] = seed;
        Self::new(
            u32::from_le_bytes([a0, a1, a2, a3]),
            u32::from_le_bytes([b0, b1, b2, b3]),
        )
    }
}
