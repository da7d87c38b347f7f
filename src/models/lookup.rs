//! Outcome of a best-effort lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN;

/// A value that may not have been obtainable.
///
/// Serializes as the plain string, or as the `"Unknown"` sentinel when the
/// lookup failed. Reading `"Unknown"` back yields [`Lookup::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Lookup {
    Found(String),
    Unknown,
}

impl Lookup {
    /// Wrap a fallible lookup, discarding the failure reason.
    pub fn from_result<E>(result: Result<String, E>) -> Self {
        match result {
            Ok(value) if !value.is_empty() => Lookup::Found(value),
            _ => Lookup::Unknown,
        }
    }

    /// The recorded string, sentinel included.
    pub fn as_str(&self) -> &str {
        match self {
            Lookup::Found(value) => value,
            Lookup::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Lookup> for String {
    fn from(lookup: Lookup) -> Self {
        match lookup {
            Lookup::Found(value) => value,
            Lookup::Unknown => UNKNOWN.to_string(),
        }
    }
}

impl From<String> for Lookup {
    fn from(value: String) -> Self {
        if value.is_empty() || value == UNKNOWN {
            Lookup::Unknown
        } else {
            Lookup::Found(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_serializes_as_sentinel() {
        let json = serde_json::to_string(&Lookup::Unknown).unwrap();
        assert_eq!(json, "\"Unknown\"");
    }

    #[test]
    fn found_serializes_as_plain_string() {
        let json = serde_json::to_string(&Lookup::Found("203.0.113.7".into())).unwrap();
        assert_eq!(json, "\"203.0.113.7\"");
    }

    #[test]
    fn sentinel_reads_back_as_unknown() {
        let lookup: Lookup = serde_json::from_str("\"Unknown\"").unwrap();
        assert_eq!(lookup, Lookup::Unknown);
    }

    #[test]
    fn from_result_maps_errors_and_empty_values() {
        assert_eq!(Lookup::from_result::<()>(Err(())), Lookup::Unknown);
        assert_eq!(Lookup::from_result::<()>(Ok(String::new())), Lookup::Unknown);
        assert_eq!(
            Lookup::from_result::<()>(Ok("10.0.0.2".into())),
            Lookup::Found("10.0.0.2".into())
        );
    }
}
