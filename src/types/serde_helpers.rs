use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::Deserialize;

/// Serialize a decimal string as a JSON number (the exchange expects `salt`
/// as a number, not a string).
#[allow(clippy::ptr_arg)]
pub(crate) fn string_as_u64<S>(value: &String, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let n: u64 = value
        .parse()
        .map_err(|_| ser::Error::custom(format!("'{}' is not a u64 integer", value)))?;
    serializer.serialize_u64(n)
}

/// Accept either a JSON number or a string and keep it as a string
pub(crate) fn u64_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n.to_string()),
        Raw::Str(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => Ok(s),
        Raw::Str(s) => Err(de::Error::custom(format!("'{}' is not an integer", s))),
    }
}
