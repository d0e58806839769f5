//! Registered Amino type names (e.g. `cosmos-sdk/MsgSend`)

use crate::error::{Error, ErrorKind};
use anomaly::fail;
use serde::{de, Deserialize, Serialize, Serializer};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Name of a registered Amino type, as it appears in the `type` field of
/// type-wrapped JSON values
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TypeName(String);

impl TypeName {
    /// Create a new `sdk.Msg` type name after validating it
    pub fn new(name: impl AsRef<str>) -> Result<Self, Error> {
        name.as_ref().parse()
    }

    /// Borrow this [`TypeName`] as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            fail!(ErrorKind::MalformedInput, "empty type name");
        }

        for c in s.chars() {
            match c {
                'A'..='Z' | 'a'..='z' | '0'..='9' | '/' | '-' | '_' | '.' => (),
                _ => fail!(
                    ErrorKind::MalformedInput,
                    "invalid character `{}` in type name: `{}`",
                    c,
                    s
                ),
            }
        }

        Ok(TypeName(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl Serialize for TypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
