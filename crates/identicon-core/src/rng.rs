//! Seeded pseudo-random number generator.
//!
//! A Xorshift-style generator over four 32-bit words, seeded from an
//! arbitrary string. The update step and the string folding both reproduce
//! 32-bit two's-complement wraparound exactly, so the draw sequence is
//! bit-identical to the widely deployed JavaScript blockies generator. That
//! compatibility is the whole point: the same seed must produce the same
//! icon everywhere.

/// Xorshift generator over four signed 32-bit words.
///
/// Each `generate` call owns one instance; state is mutated destructively on
/// every draw and is never shared or carried across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: [i32; 4],
}

impl SeededRng {
    /// Create a generator seeded from the given string.
    ///
    /// All four words start at zero. Each UTF-16 code unit of the seed is
    /// folded into word `i % 4` as `(w << 5) - w + code`, with every
    /// operation wrapping at 32 bits. UTF-16 units (not code points) are
    /// what the reference generator consumes, so astral-plane characters
    /// fold as surrogate pairs.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let mut state = [0i32; 4];
        for (i, code) in seed.encode_utf16().enumerate() {
            let w = state[i % 4];
            state[i % 4] = (w << 5).wrapping_sub(w).wrapping_add(i32::from(code));
        }
        Self { state }
    }

    /// Advance the state one step and return a draw in the unit interval.
    ///
    /// One Xorshift step: the oldest word is folded into the newest through
    /// shifted XORs. Right shifts are arithmetic (sign-propagating); only
    /// the final conversion of `w3` reinterprets the word as unsigned. The
    /// result is `u32(w3) / 2^31`, which lands in [0, 1) for every seed
    /// observed in practice but is not clamped: values up to 2.0 are
    /// representable and downstream consumers tolerate them.
    pub fn next(&mut self) -> f64 {
        let s = &mut self.state;
        let t = s[0] ^ (s[0] << 11);
        s[0] = s[1];
        s[1] = s[2];
        s[2] = s[3];
        s[3] = s[3] ^ (s[3] >> 19) ^ t ^ (t >> 8);
        f64::from(s[3] as u32) / f64::from(1u32 << 31)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> [i32; 4] {
        self.state
    }
}
