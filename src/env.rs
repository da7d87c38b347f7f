//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`], which delegates to [`std::env::var`].
//! Tests build an [`Env::mock()`] from explicit pairs so config layering can
//! be exercised without mutating the process environment.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable, treating empty values as absent.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Interpret a variable as a boolean switch.
    ///
    /// Returns `None` when the variable is unset, and `Some(Err(raw))` when
    /// it is set to something that is not a recognised boolean word.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        let raw = self.get(name)?;
        Some(match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(raw),
        })
    }
}
