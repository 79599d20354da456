//! Serde helpers for the backend's loosely typed JSON.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `estado` flag arrives as a boolean, a number or a string depending on the
/// backend version. Read any of them, always write a boolean.
pub mod active_flag {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawFlag>::deserialize(deserializer)? {
            None => Ok(false),
            Some(RawFlag::Bool(b)) => Ok(b),
            Some(RawFlag::Int(n)) => Ok(n != 0),
            Some(RawFlag::Float(n)) => Ok(n != 0.0),
            Some(RawFlag::Text(s)) => parse_text(&s)
                .ok_or_else(|| D::Error::custom(format!("unrecognized estado value: {s:?}"))),
        }
    }

    fn parse_text(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "activo" | "active" => Some(true),
            "false" | "0" | "" | "inactivo" | "inactive" => Some(false),
            _ => None,
        }
    }
}
