//! Text-document encoding.
//!
//! Integers are written as quoted decimal strings rather than number tokens, so consumers
//! whose native numbers are doubles do not silently lose precision. An absent value is
//! written as `null`, and both `null` and `""` read back as absent.
use core::fmt;

use log::{debug, trace};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::{Int, MaybeInt, ParseIntError};

impl Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for MaybeInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(i) => serializer.serialize_some(i),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

fn parse<E: de::Error>(v: &str) -> Result<Int, E> {
    v.parse().map_err(|err: ParseIntError| {
        debug!("rejected integer literal {:?}", err.text());
        E::custom(err)
    })
}

struct IntVisitor;
impl<'de> Visitor<'de> for IntVisitor {
    type Value = Int;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string containing a decimal integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse(v)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IntVisitor)
    }
}

struct MaybeIntVisitor;
impl<'de> Visitor<'de> for MaybeIntVisitor {
    type Value = MaybeInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null or a string containing a decimal integer")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        trace!("decoded null as an absent integer");
        Ok(MaybeInt::Absent)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.is_empty() {
            trace!("decoded empty string as an absent integer");
            return Ok(MaybeInt::Absent);
        }
        parse(v).map(MaybeInt::Present)
    }
}

impl<'de> Deserialize<'de> for MaybeInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(MaybeIntVisitor)
    }
}
