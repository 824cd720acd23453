//! Custom serde helpers for backend wire formats.
//!
//! The storefront backend serializes SQLite rows directly, so booleans arrive as
//! `0`/`1`, counts may be missing, and identifiers are sometimes numbers and
//! sometimes strings.

/// Deserializes a boolean sent either as `true`/`false` or as `0`/`1`.
pub mod int_bool {
    use serde::de::{self, Visitor};
    use serde::Deserializer;
    use std::fmt;

    struct IntBoolVisitor;

    impl<'de> Visitor<'de> for IntBoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean or an integer flag")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntBoolVisitor)
    }
}

/// Deserializes an identifier sent either as a JSON number or a string.
pub mod string_or_number {
    use serde::de::{self, Visitor};
    use serde::Deserializer;
    use std::fmt;

    struct StringOrNumberVisitor;

    impl<'de> Visitor<'de> for StringOrNumberVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

/// Deserializes a count where `null` means zero. Pair with `#[serde(default)]`
/// so a missing field also means zero.
pub mod count_or_zero {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(with = "super::int_bool")]
        on_sale: bool,
    }

    #[derive(Deserialize)]
    struct Placed {
        #[serde(with = "super::string_or_number")]
        order_id: String,
    }

    #[derive(Deserialize)]
    struct Counts {
        #[serde(default, with = "super::count_or_zero")]
        cart_count: u32,
    }

    #[test]
    fn test_int_bool_accepts_ints_and_bools() {
        let f: Flags = serde_json::from_str(r#"{"on_sale": 1}"#).unwrap();
        assert!(f.on_sale);
        let f: Flags = serde_json::from_str(r#"{"on_sale": 0}"#).unwrap();
        assert!(!f.on_sale);
        let f: Flags = serde_json::from_str(r#"{"on_sale": true}"#).unwrap();
        assert!(f.on_sale);
    }

    #[test]
    fn test_string_or_number() {
        let p: Placed = serde_json::from_str(r#"{"order_id": 17}"#).unwrap();
        assert_eq!(p.order_id, "17");
        let p: Placed = serde_json::from_str(r#"{"order_id": "ORD-17"}"#).unwrap();
        assert_eq!(p.order_id, "ORD-17");
    }

    #[test]
    fn test_count_or_zero() {
        let c: Counts = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(c.cart_count, 0);
        let c: Counts = serde_json::from_str(r#"{"cart_count": null}"#).unwrap();
        assert_eq!(c.cart_count, 0);
        let c: Counts = serde_json::from_str(r#"{"cart_count": 3}"#).unwrap();
        assert_eq!(c.cart_count, 3);
    }
}
