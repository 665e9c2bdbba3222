use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque jetton master address.
///
/// The wallet never interprets the address beyond equality. Comparisons use a
/// normalized form (trimmed, ASCII lowercase) so approval lookups and
/// preferred-order matching agree no matter how the caller cased the string.
/// Malformed input is carried as-is rather than rejected; an address that
/// matches nothing simply falls through the "no record" branches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn new(raw: impl AsRef<str>) -> Self {
        TokenAddress(raw.as_ref().trim().to_ascii_lowercase())
    }

    /// Normalized form of the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenAddress {
    fn from(raw: &str) -> Self {
        TokenAddress::new(raw)
    }
}

impl From<String> for TokenAddress {
    fn from(raw: String) -> Self {
        TokenAddress::new(raw)
    }
}

// Normalization must also apply to addresses arriving through deserialization,
// so the impl is written out instead of derived.
impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(TokenAddress::new(raw))
    }
}
