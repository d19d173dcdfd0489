use rand::RngCore;

use crate::bigint::{BigInt, Sign};

impl BigInt {
    /// Replace this value with a random magnitude of exactly `bits` bits.
    /// `bits == 0` resets to zero. Sign becomes Positive.
    pub fn randomize<R: RngCore + ?Sized>(&mut self, rng: &mut R, bits: usize) {
        self.set_sign(Sign::Positive);

        if bits == 0 {
            self.clear();
            return;
        }

        let mut array = vec![0u8; (bits + 7) / 8];
        rng.fill_bytes(&mut array);
        // mask excess high bits, then force the top bit so the bit length
        // is exact
        if bits % 8 != 0 {
            array[0] &= 0xFF >> (8 - bits % 8);
            array[0] |= 0x80 >> (8 - bits % 8);
        } else {
            array[0] |= 0x80;
        }
        self.binary_decode(&array);
    }

    /// A random value of exactly `bits` bits.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> BigInt {
        let mut n = BigInt::default();
        n.randomize(rng, bits);
        n
    }
}
