use core::fmt;
use core::str::FromStr;

use crate::bigint::{Base, BigInt, Sign};
use crate::error::Error;
use crate::mp::{round_up, word_div, word_madd2, Word, WORD_BLOCK, WORD_BYTES};

impl BigInt {
    /// Size of the encoding of this value in the given base. The decimal
    /// estimate is an upper bound for buffer sizing, not an exact digit
    /// count.
    pub fn encoded_size(&self, base: Base) -> usize {
        const LOG_2_BASE_10: f64 = 0.30102999566;

        match base {
            Base::Binary => self.bytes(),
            Base::Hexadecimal => 2 * self.bytes(),
            Base::Octal => (self.bits() + 2) / 3,
            Base::Decimal => (self.bits() as f64 * LOG_2_BASE_10) as usize + 1,
        }
    }

    /// Write the magnitude into `output` as exactly [`BigInt::bytes`] bytes,
    /// most significant first. `output` must be at least that long. Sign is
    /// not encoded.
    pub fn binary_encode(&self, output: &mut [u8]) {
        let sig_bytes = self.bytes();
        for j in 0..sig_bytes {
            output[sig_bytes - j - 1] = self.byte_at(j);
        }
    }

    /// The canonical big-endian byte encoding of the magnitude. Empty for
    /// zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = vec![0; self.bytes()];
        self.binary_encode(&mut output);
        output
    }

    /// Replace this value with the big-endian magnitude in `buf`. The
    /// result is sign-free (Positive); it is the inverse of
    /// [`BigInt::binary_encode`].
    pub fn binary_decode(&mut self, buf: &[u8]) {
        let length = buf.len();

        self.clear();
        self.reg.resize(round_up(length / WORD_BYTES + 1, WORD_BLOCK), 0);

        let full_words = length / WORD_BYTES;
        for j in 0..full_words {
            let top = length - WORD_BYTES * j;
            for k in (1..=WORD_BYTES).rev() {
                self.reg[j] = (self.reg[j] << 8) | Word::from(buf[top - k]);
            }
        }
        for &byte in buf.iter().take(length % WORD_BYTES) {
            self.reg[full_words] = (self.reg[full_words] << 8) | Word::from(byte);
        }
    }

    /// Decode a buffer of digit characters (raw bytes for `Binary`) in the
    /// given base into a magnitude.
    pub fn decode(buf: &[u8], base: Base) -> Result<BigInt, Error> {
        match base {
            Base::Binary => {
                let mut n = BigInt::default();
                n.binary_decode(buf);
                Ok(n)
            }
            Base::Hexadecimal => {
                // an odd digit count means an implicit leading zero nibble
                let binary = if buf.len() % 2 == 1 {
                    let mut padded = Vec::with_capacity(buf.len() + 1);
                    padded.push(b'0');
                    padded.extend_from_slice(buf);
                    hex::decode(padded)?
                } else {
                    hex::decode(buf)?
                };
                let mut n = BigInt::default();
                n.binary_decode(&binary);
                Ok(n)
            }
            Base::Decimal | Base::Octal => {
                let radix: Word = if base == Base::Decimal { 10 } else { 8 };
                let mut mag: Vec<Word> = Vec::new();
                for &b in buf {
                    let digit = (b as char)
                        .to_digit(radix)
                        .ok_or(Error::InvalidDigit { ch: b as char, base })?;
                    let mut carry = digit as Word;
                    for limb in mag.iter_mut() {
                        *limb = word_madd2(*limb, radix, &mut carry);
                    }
                    if carry != 0 {
                        mag.push(carry);
                    }
                }
                let mut n = BigInt::with_capacity(Sign::Positive, mag.len());
                n.reg[..mag.len()].copy_from_slice(&mag);
                Ok(n)
            }
        }
    }

    /// Encode the magnitude as digit characters in the given base (raw
    /// bytes for `Binary`). Decimal and octal encode zero as `"0"`.
    pub fn encode(&self, base: Base) -> Vec<u8> {
        match base {
            Base::Binary => self.to_bytes(),
            Base::Hexadecimal => hex::encode(self.to_bytes()).into_bytes(),
            Base::Decimal | Base::Octal => {
                let radix: Word = if base == Base::Decimal { 10 } else { 8 };
                let mut scratch = self.significant().to_vec();
                if scratch.is_empty() {
                    return b"0".to_vec();
                }
                let mut digits = Vec::with_capacity(self.encoded_size(base));
                let mut sig = scratch.len();
                while sig > 0 {
                    let rem = word_div(&mut scratch[..sig], radix);
                    digits.push(b'0' + rem as u8);
                    while sig > 0 && scratch[sig - 1] == 0 {
                        sig -= 1;
                    }
                }
                digits.reverse();
                digits
            }
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Optional leading `-`, then `0x` for hexadecimal or a single leading
    /// `0` for octal, otherwise decimal.
    fn from_str(s: &str) -> Result<Self, Error> {
        let bytes = s.as_bytes();
        let mut markers = 0;
        let negative = bytes.first() == Some(&b'-');
        if negative {
            markers += 1;
        }

        let mut base = Base::Decimal;
        if bytes.len() > markers + 2 && bytes[markers] == b'0' && bytes[markers + 1] == b'x' {
            markers += 2;
            base = Base::Hexadecimal;
        } else if bytes.len() > markers + 1 && bytes[markers] == b'0' {
            markers += 1;
            base = Base::Octal;
        }

        let mut n = BigInt::decode(&bytes[markers..], base)?;
        n.set_sign(if negative { Sign::Negative } else { Sign::Positive });
        Ok(n)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.encode(Base::Decimal);
        f.write_str(core::str::from_utf8(&digits).map_err(|_| fmt::Error)?)
    }
}

fn fmt_hex(n: &BigInt, f: &mut fmt::Formatter<'_>, digits: String) -> fmt::Result {
    if n.is_negative() {
        f.write_str("-")?;
    }
    if f.alternate() {
        f.write_str("0x")?;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        f.write_str("0")
    } else {
        f.write_str(trimmed)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(self, f, hex::encode(self.to_bytes()))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(self, f, hex::encode_upper(self.to_bytes()))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(test)]
mod test {
    use core::str::FromStr;

    use crate::bigint::{Base, BigInt, Sign};
    use crate::error::Error;
    use num_bigint::BigUint;
    use num_bigint::RandomBits;
    use num_traits::Num;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_binary_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(7);

        for _ in 0..100 {
            let a: BigUint = prng.sample(RandomBits::new(300));
            let reference = a.to_bytes_be();
            let n = BigInt::decode(&reference, Base::Binary).unwrap();
            if a == BigUint::from(0u8) {
                assert!(n.is_zero());
                continue;
            }
            assert_eq!(n.to_bytes(), reference);
            assert_eq!(n.bits() as u64, a.bits());
        }
    }

    #[test]
    fn test_binary_decode_words() {
        // three leading bytes fold into a single limb
        let mut n = BigInt::default();
        n.binary_decode(&[0x01, 0x00, 0x00]);
        assert_eq!(n.sig_words(), 1);
        assert_eq!(n.word_at(0), 0x0001_0000);
        assert_eq!(n.size(), 8);

        // a full word plus a leftover byte
        let mut n = BigInt::default();
        n.binary_decode(&[0xAA, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(n.word_at(0), 0x0102_0304);
        assert_eq!(n.word_at(1), 0xAA);
        assert_eq!(n.sig_words(), 2);

        // decoding over an existing value replaces it entirely
        let mut n = BigInt::from(u64::MAX);
        n.set_sign(Sign::Negative);
        n.binary_decode(&[0x05]);
        assert_eq!(n.to_u64().unwrap(), 5);
        assert!(n.is_positive());
    }

    #[test]
    fn test_binary_encode_into_buffer() {
        let n = BigInt::from(0x0102_03u64);
        let mut buf = [0u8; 3];
        n.binary_encode(&mut buf);
        assert_eq!(buf, [0x01, 0x02, 0x03]);

        assert_eq!(BigInt::default().to_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn test_from_str_markers() {
        let n = BigInt::from_str("-0x10").unwrap();
        assert_eq!(n.sign(), Sign::Negative);
        assert_eq!(n.to_u64().unwrap(), 16);
        assert_eq!(n.bits(), 5);

        let n = BigInt::from_str("0x10").unwrap();
        assert!(n.is_positive());
        assert_eq!(n.to_u64().unwrap(), 16);

        let n = BigInt::from_str("017").unwrap();
        assert_eq!(n.to_u64().unwrap(), 0o17);

        let n = BigInt::from_str("-1234567890123456789").unwrap();
        assert!(n.is_negative());
        assert_eq!(n.to_u64().unwrap(), 1_234_567_890_123_456_789);

        // a lone zero is decimal, not an octal marker
        let n = BigInt::from_str("0").unwrap();
        assert!(n.is_zero());

        // minus zero normalizes to canonical zero
        let n = BigInt::from_str("-0").unwrap();
        assert!(n.is_zero());
        assert_eq!(n.sign(), Sign::Positive);

        let n = BigInt::from_str("").unwrap();
        assert!(n.is_zero());
    }

    #[test]
    fn test_from_str_rejects_bad_digits() {
        assert!(matches!(
            BigInt::from_str("12a4"),
            Err(Error::InvalidDigit { ch: 'a', base: Base::Decimal })
        ));
        assert!(matches!(
            BigInt::from_str("09"),
            Err(Error::InvalidDigit { ch: '9', base: Base::Octal })
        ));
        // "0x" with nothing after is octal text "x"
        assert!(matches!(
            BigInt::from_str("0x"),
            Err(Error::InvalidDigit { ch: 'x', base: Base::Octal })
        ));
        assert!(matches!(BigInt::from_str("0xfg"), Err(Error::Hex(_))));
    }

    #[test]
    fn test_from_str_oracle() {
        let mut prng = ChaCha20Rng::seed_from_u64(8);

        for _ in 0..50 {
            let a: BigUint = prng.sample(RandomBits::new(200));
            for (radix, text) in [
                (10, a.to_str_radix(10)),
                (8, format!("0{}", a.to_str_radix(8))),
                (16, format!("0x{}", a.to_str_radix(16))),
            ] {
                let n = BigInt::from_str(&text).unwrap();
                let reference = BigUint::from_str_radix(text.trim_start_matches("0x"), radix)
                    .unwrap();
                assert_eq!(n.to_bytes(), BigInt::decode(&reference.to_bytes_be(), Base::Binary).unwrap().to_bytes());
            }
        }
    }

    #[test]
    fn test_decode_hex_odd_length() {
        let n = BigInt::decode(b"fff", Base::Hexadecimal).unwrap();
        assert_eq!(n.to_u64().unwrap(), 0xFFF);
        let n = BigInt::decode(b"0fff", Base::Hexadecimal).unwrap();
        assert_eq!(n.to_u64().unwrap(), 0xFFF);
    }

    #[test]
    fn test_digit_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(9);

        for _ in 0..20 {
            let a: BigUint = prng.sample(RandomBits::new(180));
            let n = BigInt::decode(&a.to_bytes_be(), Base::Binary).unwrap();
            for base in Base::iter() {
                let encoded = n.encode(base);
                let back = BigInt::decode(&encoded, base).unwrap();
                assert_eq!(back.to_bytes(), n.to_bytes(), "base {base}");
            }
        }
    }

    #[test]
    fn test_encode_decimal_oracle() {
        let mut prng = ChaCha20Rng::seed_from_u64(10);

        for _ in 0..50 {
            let a: BigUint = prng.sample(RandomBits::new(160));
            let n = BigInt::decode(&a.to_bytes_be(), Base::Binary).unwrap();
            assert_eq!(n.encode(Base::Decimal), a.to_str_radix(10).into_bytes());
            assert_eq!(n.encode(Base::Octal), a.to_str_radix(8).into_bytes());
        }
    }

    #[test]
    fn test_encoded_size() {
        let zero = BigInt::default();
        assert_eq!(zero.encoded_size(Base::Binary), 0);
        assert_eq!(zero.encoded_size(Base::Hexadecimal), 0);
        assert_eq!(zero.encoded_size(Base::Decimal), 1);

        let mut prng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..50 {
            let a: BigUint = prng.sample(RandomBits::new(200));
            if a == BigUint::from(0u8) {
                continue;
            }
            let n = BigInt::decode(&a.to_bytes_be(), Base::Binary).unwrap();
            assert_eq!(n.encoded_size(Base::Binary), n.bytes());
            assert_eq!(n.encoded_size(Base::Hexadecimal), 2 * n.bytes());
            assert_eq!(n.encoded_size(Base::Octal), (n.bits() + 2) / 3);

            // decimal size is a hint: exact or one over
            let actual = n.encode(Base::Decimal).len();
            let estimate = n.encoded_size(Base::Decimal);
            assert!(estimate >= actual && estimate <= actual + 1,
                "estimate {estimate} for {actual} digits");
        }
    }

    #[test]
    fn test_display_and_hex() {
        let mut n = BigInt::from(255u64);
        assert_eq!(n.to_string(), "255");
        assert_eq!(format!("{n:x}"), "ff");
        assert_eq!(format!("{n:#x}"), "0xff");
        assert_eq!(format!("{n:X}"), "FF");

        n.set_sign(Sign::Negative);
        assert_eq!(n.to_string(), "-255");
        assert_eq!(format!("{n:x}"), "-ff");

        let zero = BigInt::default();
        assert_eq!(zero.to_string(), "0");
        assert_eq!(format!("{zero:x}"), "0");

        let n = BigInt::from(5u64);
        assert_eq!(format!("{n:x}"), "5");
    }

    #[test]
    fn test_display_from_str_inverse() {
        let mut prng = ChaCha20Rng::seed_from_u64(12);
        for _ in 0..20 {
            let a: BigUint = prng.sample(RandomBits::new(120));
            let n = BigInt::decode(&a.to_bytes_be(), Base::Binary).unwrap();
            let back = BigInt::from_str(&n.to_string()).unwrap();
            assert_eq!(back, n);
        }
    }
}
