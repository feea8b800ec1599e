use serde::{Deserialize, Serialize, de};
use serde_json::{Number, Value};
use std::fmt;

/// Unsigned integer as emitted upstream: a JSON number, or a decimal or
/// `0x`-prefixed hex string.
///
/// Candid `nat` values exceed what JSON numbers carry, so encoders emit them
/// either way. The original form is kept so normalized output matches input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Number(Number),
    Text(String),
}

fn is_integer_str(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&Quantity> for Value {
    fn from(quantity: &Quantity) -> Self {
        match quantity {
            Quantity::Number(n) => Value::Number(n.clone()),
            Quantity::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Quantity::Number(n) => n.serialize(serializer),
            Quantity::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) if n.is_u64() => Ok(Quantity::Number(n)),
            Value::String(s) if is_integer_str(&s) => Ok(Quantity::Text(s)),
            other => Err(de::Error::custom(format!(
                "expected an unsigned integer or integer string, got {}",
                other
            ))),
        }
    }
}
