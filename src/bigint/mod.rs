mod bits;
mod cmp;
mod codec;
mod rand;
mod serde;

use core::mem;

use crate::mp::{round_up, Word, WORD_BITS, WORD_BLOCK, WORD_BYTES};

/// Sign tag of a [`BigInt`]. A zero magnitude is always `Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
pub enum Sign {
    Negative,
    Positive,
}

/// Numeral system for text and byte encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

/// Arbitrary-precision signed integer.
///
/// The magnitude lives in `reg` as little-endian limbs; `reg.len()` is the
/// allocated capacity and may exceed the number of significant limbs.
/// Storage grows in blocks of [`WORD_BLOCK`] limbs and never shrinks except
/// through [`BigInt::clear`].
pub struct BigInt {
    reg: Vec<Word>,
    sign: Sign,
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt {
            reg: Vec::new(),
            sign: Sign::Positive,
        }
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        if n == 0 {
            return BigInt::default();
        }
        let limbs_needed = mem::size_of::<u64>() / WORD_BYTES;
        let mut reg = vec![0; round_up(limbs_needed, WORD_BLOCK)];
        for (j, limb) in reg.iter_mut().enumerate().take(limbs_needed) {
            *limb = (n >> (j * WORD_BITS)) as Word;
        }
        BigInt {
            reg,
            sign: Sign::Positive,
        }
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> Self {
        BigInt::from(u64::from(n))
    }
}

impl Clone for BigInt {
    fn clone(&self) -> Self {
        let words = self.sig_words();
        if words == 0 {
            return BigInt {
                reg: vec![0; 2],
                sign: Sign::Positive,
            };
        }
        let mut reg = vec![0; round_up(words, WORD_BLOCK)];
        reg[..words].copy_from_slice(&self.reg[..words]);
        BigInt {
            reg,
            sign: self.sign,
        }
    }
}

impl BigInt {
    /// A zeroed value with the given sign and at least `size` limbs of
    /// capacity, rounded up to the growth block.
    pub fn with_capacity(sign: Sign, size: usize) -> Self {
        BigInt {
            reg: vec![0; round_up(size, WORD_BLOCK)],
            sign,
        }
    }

    /// Allocated limb count. May exceed [`BigInt::sig_words`].
    pub fn size(&self) -> usize {
        self.reg.len()
    }

    /// Limb count after trimming most-significant zero limbs.
    pub fn sig_words(&self) -> usize {
        self.reg.iter().rposition(|&w| w != 0).map_or(0, |p| p + 1)
    }

    pub(crate) fn significant(&self) -> &[Word] {
        &self.reg[..self.sig_words()]
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sig_words() == 0
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_even(&self) -> bool {
        !self.get_bit(0)
    }

    pub fn is_odd(&self) -> bool {
        self.get_bit(0)
    }

    /// Set the sign. A zero value stays `Positive` no matter what is asked;
    /// every other sign mutation routes through here.
    pub fn set_sign(&mut self, sign: Sign) {
        self.sign = if self.is_zero() { Sign::Positive } else { sign };
    }

    pub fn flip_sign(&mut self) {
        self.set_sign(self.reverse_sign());
    }

    /// The opposite of the current sign, without mutating.
    pub fn reverse_sign(&self) -> Sign {
        match self.sign {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// A copy with the sign forced positive.
    pub fn abs(&self) -> BigInt {
        let mut x = self.clone();
        x.set_sign(Sign::Positive);
        x
    }

    /// Exchange storage and sign with `other`. No allocation.
    pub fn swap(&mut self, other: &mut BigInt) {
        mem::swap(&mut self.reg, &mut other.reg);
        mem::swap(&mut self.sign, &mut other.sign);
    }

    /// Reset to canonical zero, releasing the limb storage. The only
    /// operation that shrinks capacity.
    pub fn clear(&mut self) {
        self.reg.clear();
        self.sign = Sign::Positive;
    }

    /// Ensure capacity for `n` limbs beyond the current size, rounded up to
    /// the growth block. New limbs are zero.
    pub fn grow_reg(&mut self, n: usize) {
        let target = round_up(self.size() + n, WORD_BLOCK);
        self.reg.resize(target, 0);
    }

    /// Ensure capacity of at least `n` limbs, rounded up to the growth
    /// block. No-op if already large enough; never shrinks.
    pub fn grow_to(&mut self, n: usize) {
        if n > self.size() {
            self.reg.resize(round_up(n, WORD_BLOCK), 0);
        }
    }
}

impl core::ops::Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut x = self.clone();
        x.flip_sign();
        x
    }
}

impl core::ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.flip_sign();
        self
    }
}
