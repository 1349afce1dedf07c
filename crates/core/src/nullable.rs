//! Serde helpers for fields the backend sends as explicit `null`.
//!
//! `#[serde(default)]` only covers a missing key; list and flag columns that
//! are `null` on page rows need [`or_default`] as well.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` (or a missing key, with `#[serde(default)]`) as
/// `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "or_default")]
        ids: Vec<i64>,
        #[serde(default, deserialize_with = "or_default")]
        flag: bool,
    }

    #[test]
    fn null_and_missing_both_become_default() {
        let row: Row = serde_json::from_value(json!({ "ids": null, "flag": null })).unwrap();
        assert!(row.ids.is_empty());
        assert!(!row.flag);

        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert!(row.ids.is_empty());

        let row: Row = serde_json::from_value(json!({ "ids": [1, 2], "flag": true })).unwrap();
        assert_eq!(row.ids, vec![1, 2]);
        assert!(row.flag);
    }
}
