use crate::bigint::BigInt;
use crate::error::Error;
use crate::mp::{get_byte, Word, WORD_BITS, WORD_BYTES};

impl BigInt {
    /// Limb `n`, or 0 past the current capacity.
    pub fn word_at(&self, n: usize) -> Word {
        if n < self.size() {
            self.reg[n]
        } else {
            0
        }
    }

    /// The `n`-th least-significant byte of the value, 0 past capacity.
    pub fn byte_at(&self, n: usize) -> u8 {
        let word_num = n / WORD_BYTES;
        let byte_num = n % WORD_BYTES;
        if word_num >= self.size() {
            0
        } else {
            get_byte(WORD_BYTES - byte_num - 1, self.reg[word_num])
        }
    }

    /// The `n`-th least-significant bit of the value.
    pub fn get_bit(&self, n: usize) -> bool {
        (self.word_at(n / WORD_BITS) >> (n % WORD_BITS)) & 1 == 1
    }

    /// Set bit `n`, growing storage to cover it if needed.
    pub fn set_bit(&mut self, n: usize) {
        let which = n / WORD_BITS;
        let mask = (1 as Word) << (n % WORD_BITS);
        if which >= self.size() {
            self.grow_to(which + 1);
        }
        self.reg[which] |= mask;
    }

    /// Clear bit `n`. No-op past the current capacity.
    pub fn clear_bit(&mut self, n: usize) {
        let which = n / WORD_BITS;
        let mask = (1 as Word) << (n % WORD_BITS);
        if which < self.size() {
            self.reg[which] &= !mask;
        }
    }

    /// Truncate to the lowest `n` bits. `n == 0` resets to canonical zero;
    /// `n >= bits()` is a no-op.
    pub fn mask_bits(&mut self, n: usize) {
        if n == 0 {
            self.clear();
            return;
        }
        if n >= self.bits() {
            return;
        }

        let top_word = n / WORD_BITS;
        let mask = ((1 as Word) << (n % WORD_BITS)) - 1;

        for j in top_word + 1..self.size() {
            self.reg[j] = 0;
        }
        self.reg[top_word] &= mask;
    }

    /// Extract up to 32 bits starting at bit `offset`, zero-extending past
    /// the magnitude. Reads a fixed 8-byte window at `offset / 8`, so the
    /// requested bits must fit inside it.
    pub fn get_substring(&self, offset: usize, length: usize) -> Result<u32, Error> {
        if length > 32 {
            return Err(Error::SubstringTooLong(length));
        }

        let mut piece: u64 = 0;
        for j in 0..8 {
            piece = (piece << 8) | u64::from(self.byte_at(offset / 8 + (7 - j)));
        }

        let mask = (1u64 << length) - 1;
        let shift = offset % 8;

        Ok(((piece >> shift) & mask) as u32)
    }

    /// Bit length of the magnitude; 0 for a zero value.
    pub fn bits(&self) -> usize {
        let words = self.sig_words();
        if words == 0 {
            return 0;
        }

        let full_words = words - 1;
        let top_bits = WORD_BITS - self.reg[full_words].leading_zeros() as usize;
        full_words * WORD_BITS + top_bits
    }

    /// Byte length of the magnitude.
    pub fn bytes(&self) -> usize {
        (self.bits() + 7) / 8
    }

    /// The magnitude as a u64, or [`Error::TooWide`] past 64 bits.
    pub fn to_u64(&self) -> Result<u64, Error> {
        if self.bits() > 64 {
            return Err(Error::TooWide(self.bits()));
        }
        let mut out: u64 = 0;
        for j in (0..8).rev() {
            out = (out << 8) | u64::from(self.byte_at(j));
        }
        Ok(out)
    }
}
