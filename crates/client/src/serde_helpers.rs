//! Serde helpers for Google REST JSON typing.
//!
//! Responsibilities:
//! - Accept int64 fields, which the Google JSON mapping encodes as strings
//!   (`"110"`), as well as plain JSON numbers (`110`).
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, units).
//!
//! Invariants / assumptions:
//! - Parse errors are generic; no field values are echoed back.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

impl U64OrString {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            U64OrString::U64(v) => Ok(v),
            U64OrString::I64(v) => u64::try_from(v).map_err(E::custom),
            U64OrString::String(s) => s.trim().parse::<u64>().map_err(E::custom),
        }
    }
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<U64OrString>::deserialize(deserializer)?
        .map(U64OrString::into_u64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
        value: Option<u64>,
    }

    #[test]
    fn test_opt_u64_accepts_int64_string() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "110" }"#).unwrap();
        assert_eq!(parsed.value, Some(110));
    }

    #[test]
    fn test_opt_u64_accepts_number() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "value": 32 }"#).unwrap();
        assert_eq!(parsed.value, Some(32));
    }

    #[test]
    fn test_opt_u64_missing_and_null() {
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_opt_u64_rejects_negative_and_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{ "value": -1 }"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{ "value": "many" }"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_string_and_number_forms_agree(n in any::<u64>()) {
            let from_number: Wrapper =
                serde_json::from_str(&format!(r#"{{ "value": {n} }}"#)).unwrap();
            let from_string: Wrapper =
                serde_json::from_str(&format!(r#"{{ "value": "{n}" }}"#)).unwrap();
            prop_assert_eq!(from_number.value, Some(n));
            prop_assert_eq!(from_string.value, Some(n));
        }
    }
}
