use super::Decimal;
use alloc::borrow::Cow;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialize as the canonical decimal string, e.g. "123.45".
impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserialize from a decimal string; borrowed and owned text both
/// route through the byte parser.
impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        Decimal::parse(&text).map_err(de::Error::custom)
    }
}
