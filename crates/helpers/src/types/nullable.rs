use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An optional field that distinguishes "absent" from an explicit `null`.
///
/// Fields of this type must carry `#[serde(default)]` (or sit in a
/// `#[serde(default)]` container) so a missing key decodes as `Missing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Nullable<T> {
    #[default]
    Missing,
    Null,
    Present(T),
}

impl<T> Nullable<T> {
    /// JSON for this field: `None` when missing, `null` when null.
    pub fn to_json(&self, f: impl FnOnce(&T) -> Value) -> Option<Value> {
        match self {
            Nullable::Missing => None,
            Nullable::Null => Some(Value::Null),
            Nullable::Present(value) => Some(f(value)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Nullable::Present(value),
            None => Nullable::Null,
        })
    }
}
