/// Serde helper functions shared across the data model.
///
/// MRP exports write `"anchors": null` for unaligned nodes and omit optional
/// token attributes entirely. [`deserialize_null_default`] folds an explicit
/// `null` into the type's default so the model never has to distinguish
/// "absent" from "null" for list-valued fields.
use serde::{Deserialize, Deserializer};

/// Deserializer that maps JSON `null` to `T::default()`.
///
/// | JSON                  | Rust result        |
/// |-----------------------|--------------------|
/// | field absent          | `T::default()`     |
/// | `"field": null`       | `T::default()`     |
/// | `"field": <value>`    | `v`                |
///
/// Pair with `#[serde(default)]` so the absent case never reaches this
/// function:
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "crate::serde_helpers::deserialize_null_default")]
/// pub anchors: Vec<Anchor>,
/// ```
pub fn deserialize_null_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    let inner: Option<T> = Option::deserialize(deserializer)?;
    Ok(inner.unwrap_or_default())
}
