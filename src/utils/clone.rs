//! Deep cloning with a fallback chain
//!
//! Console state (policies, route drafts, group selections) is copied before
//! editing so a cancelled form leaves the original untouched. Copies are made
//! by trying a list of `CloneStrategy` implementations in order. The first
//! success wins; if every strategy fails the original is handed back
//! borrowed, so callers must not assume independence in that case.

use crate::traits::CloneStrategy;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Copies a value by serializing it to JSON and reading it back
///
/// Fails for values JSON cannot carry faithfully, such as maps with
/// non-string keys or non-finite floats.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRoundTrip;

impl<T> CloneStrategy<T> for JsonRoundTrip
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        "json-round-trip"
    }

    fn try_clone(&self, value: &T) -> Result<T> {
        let json = serde_json::to_value(value).context("Value cannot be represented as JSON")?;
        serde_json::from_value(json)
            .context("JSON form does not deserialize back into the value")
    }
}

/// Copies a value through its `Clone` implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Structural;

impl<T: Clone> CloneStrategy<T> for Structural {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn try_clone(&self, value: &T) -> Result<T> {
        Ok(value.clone())
    }
}

/// Clones `value` with the given strategies, first success wins
///
/// # Returns
/// `Cow::Owned` with the copy, or `Cow::Borrowed(value)` when every
/// strategy failed.
pub fn clone_deep_with<'a, T: Clone>(
    value: &'a T,
    strategies: &[&dyn CloneStrategy<T>],
) -> Cow<'a, T> {
    for strategy in strategies {
        match strategy.try_clone(value) {
            Ok(copy) => return Cow::Owned(copy),
            Err(err) => {
                debug!(strategy = strategy.name(), error = %err, "clone strategy failed");
            }
        }
    }

    debug!("every clone strategy failed, returning the original");
    Cow::Borrowed(value)
}

/// Deep-clones `value`: JSON round-trip first, then `Clone`
pub fn clone_deep<T>(value: &T) -> Cow<'_, T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    let strategies: [&dyn CloneStrategy<T>; 2] = [&JsonRoundTrip, &Structural];
    clone_deep_with(value, &strategies)
}
