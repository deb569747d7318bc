//! Request parameters.
//!
//! The gateway accepts loosely-typed key/value maps. [`Params`] keeps them
//! typed: every value is a [`ParamValue`], which knows how to encode itself
//! both as JSON (POST bodies) and as a query-string value (GET requests).
//!
//! Query-string coercion follows the form encoding the gateway expects:
//! booleans become `1`/`0`, numbers use their decimal form, and nested maps
//! expand to bracketed keys (`outer[inner]=value`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text
    String(String),
    /// Nested map
    Map(Params),
}

impl ParamValue {
    /// Whether this value counts as absent for required-field checks.
    ///
    /// Only the empty string is blank; `0`, `false` and empty maps are
    /// considered present.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }

    /// Borrow the value as text if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Scalar query-string form. `None` for nested maps.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some("0".to_string()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Map(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Params> for ParamValue {
    fn from(p: Params) -> Self {
        Self::Map(p)
    }
}

/// Ordered parameter map sent with a request.
///
/// Keys are kept sorted so query strings and JSON bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Get a string value by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Remove a value by key.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Whether `key` is absent or holds an empty string.
    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).map_or(true, ParamValue::is_blank)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Flatten into `(name, value)` pairs for form/query encoding.
    ///
    /// Nested maps produce bracketed names, e.g. `meta[order]`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        flatten_into(None, self, &mut pairs);
        pairs
    }
}

fn flatten_into(prefix: Option<&str>, params: &Params, out: &mut Vec<(String, String)>) {
    for (key, value) in params.iter() {
        let name = match prefix {
            Some(p) => format!("{}[{}]", p, key),
            None => key.clone(),
        };
        match value {
            ParamValue::Map(nested) => flatten_into(Some(&name), nested, out),
            scalar => {
                if let Some(v) = scalar.to_query_value() {
                    out.push((name, v));
                }
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        let params = Params::new()
            .with("empty", "")
            .with("zero", 0i64)
            .with("no", false)
            .with("text", "x");

        assert!(params.is_blank("empty"));
        assert!(params.is_blank("missing"));
        assert!(!params.is_blank("zero"));
        assert!(!params.is_blank("no"));
        assert!(!params.is_blank("text"));
    }

    #[test]
    fn test_query_value_coercion() {
        assert_eq!(ParamValue::from(true).to_query_value().unwrap(), "1");
        assert_eq!(ParamValue::from(false).to_query_value().unwrap(), "0");
        assert_eq!(ParamValue::from(42i64).to_query_value().unwrap(), "42");
        assert_eq!(ParamValue::from(0.5).to_query_value().unwrap(), "0.5");
        assert_eq!(ParamValue::from("abc").to_query_value().unwrap(), "abc");
        assert!(ParamValue::from(Params::new()).to_query_value().is_none());
    }

    #[test]
    fn test_query_pairs_flatten_nested() {
        let params = Params::new()
            .with("address", "0xabc")
            .with("meta", Params::new().with("order", "42").with("rush", true));

        assert_eq!(
            params.query_pairs(),
            vec![
                ("address".to_string(), "0xabc".to_string()),
                ("meta[order]".to_string(), "42".to_string()),
                ("meta[rush]".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_encoding_is_plain_object() {
        let params = Params::new()
            .with("amount", "0.5")
            .with("count", 3i64)
            .with("flag", true);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"amount": "0.5", "count": 3, "flag": true})
        );
    }

    #[test]
    fn test_json_decoding_picks_variants() {
        let params: Params =
            serde_json::from_str(r#"{"a":"x","b":7,"c":1.5,"d":false,"e":{"f":"g"}}"#).unwrap();

        assert_eq!(params.get("a"), Some(&ParamValue::String("x".into())));
        assert_eq!(params.get("b"), Some(&ParamValue::Integer(7)));
        assert_eq!(params.get("c"), Some(&ParamValue::Float(1.5)));
        assert_eq!(params.get("d"), Some(&ParamValue::Bool(false)));
        assert!(matches!(params.get("e"), Some(ParamValue::Map(_))));
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get_str("b"), Some("2"));
    }
}
