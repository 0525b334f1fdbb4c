//! Attribute-value encoding, as used by key-value document stores such as DynamoDB.
//!
//! Numbers travel as decimal text in the `N` slot so that no precision is lost to a native
//! floating-point type, while an absent value is written as `{"NULL": true}`.
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{DecodeError, Int, MaybeInt};

/// A single attribute of a stored item.
///
/// Only the slots relevant to integers are modelled. Unset slots are omitted when
/// serialized, matching the store's JSON wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    #[serde(rename = "NULL", default, skip_serializing_if = "Option::is_none")]
    pub null: Option<bool>,
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
}
impl AttributeValue {
    pub fn null() -> Self {
        Self {
            null: Some(true),
            ..Default::default()
        }
    }

    pub fn number<N: Into<String>>(n: N) -> Self {
        Self {
            n: Some(n.into()),
            ..Default::default()
        }
    }

    pub fn string<S: Into<String>>(s: S) -> Self {
        Self {
            s: Some(s.into()),
            ..Default::default()
        }
    }

    /// Returns true only when the null flag is present and set
    #[inline]
    pub fn is_null(&self) -> bool {
        self.null.unwrap_or(false)
    }
}

/// Conversion to and from [`AttributeValue`]
pub trait AttributeCodec: Sized {
    fn to_attribute(&self) -> AttributeValue;

    fn from_attribute(item: &AttributeValue) -> Result<Self, DecodeError>;
}

impl AttributeCodec for Int {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::number(self.to_string())
    }

    /// Requires the numeric slot; a set null flag is rejected since `Int` cannot be absent
    fn from_attribute(item: &AttributeValue) -> Result<Self, DecodeError> {
        match item.n.as_deref() {
            Some(n) if !item.is_null() => n.parse().map_err(|err| {
                debug!("rejected numeric attribute {:?}", n);
                DecodeError::Parse(err)
            }),
            _ => {
                debug!("unsupported attribute value shape: {:?}", item);
                Err(DecodeError::UnsupportedShape)
            }
        }
    }
}

impl AttributeCodec for MaybeInt {
    fn to_attribute(&self) -> AttributeValue {
        match self {
            Self::Present(i) => i.to_attribute(),
            Self::Absent => AttributeValue::null(),
        }
    }

    /// A set null flag wins over the numeric slot
    fn from_attribute(item: &AttributeValue) -> Result<Self, DecodeError> {
        if item.is_null() {
            trace!("decoded null attribute as an absent integer");
            return Ok(Self::Absent);
        }
        Int::from_attribute(item).map(Self::Present)
    }
}

impl MaybeInt {
    /// Replaces `self` with the decoded value, leaving it untouched if decoding fails
    pub fn decode_attribute_into(&mut self, item: &AttributeValue) -> Result<(), DecodeError> {
        *self = Self::from_attribute(item)?;
        Ok(())
    }
}
