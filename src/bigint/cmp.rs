use core::cmp::Ordering;

use crate::bigint::BigInt;
use crate::mp::word_cmp;

impl BigInt {
    /// Three-way comparison. With `check_signs` the signs participate
    /// (Positive > Negative, both-negative reverses the magnitude order);
    /// without it only the magnitudes are compared.
    pub fn compare(&self, other: &BigInt, check_signs: bool) -> Ordering {
        if check_signs {
            if other.is_positive() && self.is_negative() {
                return Ordering::Less;
            }
            if other.is_negative() && self.is_positive() {
                return Ordering::Greater;
            }
            if other.is_negative() && self.is_negative() {
                return word_cmp(self.significant(), other.significant()).reverse();
            }
        }
        word_cmp(self.significant(), other.significant())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other, true) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other, true)
    }
}
