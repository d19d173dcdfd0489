//! Serde support: the wire form is the sign tag plus the canonical
//! big-endian magnitude bytes, so serialized values round-trip bit exactly
//! and a forged "negative zero" normalizes on the way in.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::bigint::{BigInt, Sign};

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.sign(), self.to_bytes()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (sign, bytes) = <(Sign, Vec<u8>)>::deserialize(deserializer)?;
        let mut n = BigInt::default();
        n.binary_decode(&bytes);
        n.set_sign(sign);
        Ok(n)
    }
}
