use crate::bigint::Base;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bit substring of {0} bits exceeds the 32-bit limit")]
    SubstringTooLong(usize),
    #[error("invalid digit {ch:?} in {base} input")]
    InvalidDigit { ch: char, base: Base },
    #[error("invalid hexadecimal input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("value of {0} bits does not fit in a u64")]
    TooWide(usize),
}
