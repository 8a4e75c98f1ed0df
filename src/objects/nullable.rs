use serde::{Deserialize, Deserializer};

/// Reads a field the server may send as `null`, falling back to the type's default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
