/*
[INPUT]:  Caller identifiers given as strings or integers
[OUTPUT]: Canonical string identifiers and JSON-encoded id lists
[POS]:    Data layer - identifier normalization at the API boundary
[UPDATE]: When new identifier sources need conversions
*/

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::http::Result;

/// Remote identifier (thread id, user id, item id).
///
/// The API accepts numeric ids transmitted as strings. Every public operation takes
/// `impl Into<Id>`, so callers can pass either form and the value is normalized once.
/// Responses carry ids both as JSON strings and as JSON integers; both deserialize to
/// the same string form, and serialization always emits a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for Id {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Id {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Id, E> {
        Ok(Id::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Id, E> {
        Ok(Id(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Id, E> {
        Ok(Id::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Id, E> {
        Ok(Id::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> std::result::Result<Id, E> {
        Ok(Id::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> std::result::Result<Id, E> {
        Ok(Id::from(value))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

/// Collect caller ids into canonical form.
pub fn collect_ids<I>(ids: I) -> Vec<Id>
where
    I: IntoIterator,
    I::Item: Into<Id>,
{
    ids.into_iter().map(Into::into).collect()
}

/// Encode ids as a single JSON collection value, e.g. `["1","2"]`.
pub fn encode_ids(ids: &[Id]) -> Result<String> {
    Ok(serde_json::to_string(ids)?)
}
