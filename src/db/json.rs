//! Helpers for the JSON list columns (tags, forms, influences, ...).

use sea_orm::prelude::Json;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Json> {
    Ok(serde_json::to_value(value)?)
}

pub fn decode<T: DeserializeOwned>(value: &Json) -> Result<T> {
    Ok(serde_json::from_value(value.clone())?)
}

/// Reads a JSON array of strings, skipping anything that is not a string.
pub fn string_list(value: &Json) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Case-insensitive membership test against a JSON string array.
pub fn contains_ignore_case(value: &Json, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    string_list(value)
        .iter()
        .any(|item| item.trim().to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_list_skips_non_strings() {
        let value = json!(["Dada", 3, null, "Surrealism"]);
        assert_eq!(string_list(&value), vec!["Dada", "Surrealism"]);
    }

    #[test]
    fn test_string_list_of_non_array_is_empty() {
        assert!(string_list(&json!({"tags": ["a"]})).is_empty());
        assert!(string_list(&Json::Null).is_empty());
    }

    #[test]
    fn test_contains_ignore_case() {
        let value = json!(["Abstract", " Expressionism "]);
        assert!(contains_ignore_case(&value, "abstract"));
        assert!(contains_ignore_case(&value, "EXPRESSIONISM"));
        assert!(!contains_ignore_case(&value, "cubism"));
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let value = json!(["a", "b"]);
        let decoded: Vec<String> = decode(&value).unwrap();
        assert_eq!(decoded.len(), 2);

        let bad: Result<Vec<i32>> = decode(&value);
        assert!(bad.is_err());
    }
}
