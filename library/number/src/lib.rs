//! Arbitrary-precision integers that may be absent.
//!
//! [`Int`] is a concrete integer of unbounded size, and [`MaybeInt`] adds an explicit
//! absent state on top of it. The arithmetic on `MaybeInt` treats absence as zero for
//! addition and subtraction, and as unknown for multiplication and division.
//!
//! Both types can be encoded as JSON via `serde` (numbers are quoted decimal strings, absence
//! is `null`), or as a key-value store [`AttributeValue`] via [`AttributeCodec`].
//!
//! ```
//! use tally_number::{AttributeCodec, MaybeInt};
//!
//! let total = MaybeInt::Absent + MaybeInt::new(1) + MaybeInt::new(2);
//! assert_eq!(total.to_string(), "3");
//! assert_eq!(MaybeInt::Absent * MaybeInt::new(2), MaybeInt::Absent);
//!
//! let item = total.to_attribute();
//! assert_eq!(item.n.as_deref(), Some("3"));
//! ```
mod attribute;
mod document;
mod error;
mod integer;
mod nullable;

pub use self::attribute::{AttributeCodec, AttributeValue};
pub use self::error::{DecodeError, DivisionError, ParseIntError};
pub use self::integer::*;
pub use self::nullable::MaybeInt;

pub use num_bigint::BigInt;
#[cfg(feature = "bigfloat")]
pub use bigdecimal::BigDecimal;
