use serde::{Deserialize, Deserializer};

/// Reads `null` as the type's default, so a missing value and an explicit
/// `null` decode the same way.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
