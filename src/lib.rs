pub mod bigint;
pub mod error;
pub mod mp;

pub use bigint::{Base, BigInt, Sign};
pub use error::Error;
