//! Key/value context sequences
//!
//! This module provides:
//! - `Ctx`: an unordered map form of call-site context
//! - `ContextArgs`: everything an emission method accepts as context
//! - `Fields`: the ordered per-logger overlay used by `with_field`
//! - `normalize` / `extend_context`: pairing repair and fresh-storage concatenation

use super::record::ERROR_KEY;
use super::value::Value;
use std::collections::HashMap;

/// Marker value appended when an odd-length context is repaired
pub const ODD_CONTEXT_MESSAGE: &str = "Normalized odd number of arguments by adding nil";

/// Map of key/value pairs to pass as context
///
/// Expansion order follows the map's iteration order, which is
/// unspecified. Use a positional sequence when ordering matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctx {
    fields: HashMap<String, Value>,
}

impl Ctx {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the map
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the map (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Expand into a flat key/value sequence of `2 * len` entries
    pub fn to_pairs(&self) -> Vec<Value> {
        let mut pairs = Vec::with_capacity(self.fields.len() * 2);
        for (key, value) in &self.fields {
            pairs.push(Value::Str(key.clone()));
            pairs.push(value.clone());
        }
        pairs
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Ctx {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Context passed at a call site
///
/// Either a positional key/value sequence or a single [`Ctx`] map.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextArgs {
    Pairs(Vec<Value>),
    Map(Ctx),
}

impl ContextArgs {
    pub fn empty() -> Self {
        ContextArgs::Pairs(Vec::new())
    }

    /// Flatten into an even-length key/value sequence
    pub fn normalize(self) -> Vec<Value> {
        match self {
            ContextArgs::Pairs(pairs) => normalize(pairs),
            ContextArgs::Map(ctx) => ctx.to_pairs(),
        }
    }
}

impl Default for ContextArgs {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<()> for ContextArgs {
    fn from(_: ()) -> Self {
        ContextArgs::empty()
    }
}

impl From<Vec<Value>> for ContextArgs {
    fn from(pairs: Vec<Value>) -> Self {
        ContextArgs::Pairs(pairs)
    }
}

impl From<Ctx> for ContextArgs {
    fn from(ctx: Ctx) -> Self {
        ContextArgs::Map(ctx)
    }
}

impl<V: Into<Value>, const N: usize> From<[V; N]> for ContextArgs {
    fn from(pairs: [V; N]) -> Self {
        ContextArgs::Pairs(pairs.into_iter().map(Into::into).collect())
    }
}

/// Repair an odd-length sequence
///
/// An odd sequence gets a `nil` value for its dangling key, followed by an
/// `(ERROR_KEY, ODD_CONTEXT_MESSAGE)` marker pair. Never fails.
pub fn normalize(mut ctx: Vec<Value>) -> Vec<Value> {
    if ctx.len() % 2 != 0 {
        ctx.push(Value::Null);
        ctx.push(Value::from(ERROR_KEY));
        ctx.push(Value::from(ODD_CONTEXT_MESSAGE));
    }
    ctx
}

/// Concatenate `prefix` with the normalized `suffix` into fresh storage
pub fn extend_context(prefix: &[Value], suffix: ContextArgs) -> Vec<Value> {
    let suffix = suffix.normalize();
    let mut ctx = Vec::with_capacity(prefix.len() + suffix.len());
    ctx.extend_from_slice(prefix);
    ctx.extend(suffix);
    ctx
}

/// Ordered field overlay
///
/// Setting an existing key replaces its value in place, keeping its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_pairs(self) -> Vec<Value> {
        let mut pairs = Vec::with_capacity(self.entries.len() * 2);
        for (key, value) in self.entries {
            pairs.push(Value::Str(key));
            pairs.push(value);
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_even_is_untouched() {
        let ctx = vec![Value::from("a"), Value::from(1)];
        assert_eq!(normalize(ctx.clone()), ctx);
    }

    #[test]
    fn test_normalize_odd_appends_marker() {
        let ctx = normalize(vec![Value::from("dangling")]);
        assert_eq!(
            ctx,
            vec![
                Value::from("dangling"),
                Value::Null,
                Value::from(ERROR_KEY),
                Value::from(ODD_CONTEXT_MESSAGE),
            ]
        );
    }

    #[test]
    fn test_ctx_expansion() {
        let ctx = Ctx::new().with("user", "alice").with("id", 7);
        let pairs = ContextArgs::from(ctx).normalize();
        assert_eq!(pairs.len(), 4);
        let keys: Vec<_> = pairs.iter().step_by(2).filter_map(Value::as_str).collect();
        assert!(keys.contains(&"user"));
        assert!(keys.contains(&"id"));
    }

    #[test]
    fn test_extend_context_does_not_alias_prefix() {
        let parent = vec![Value::from("a"), Value::from(1)];
        let child = extend_context(&parent, ["b", "c"].into());
        assert_eq!(parent.len(), 2);
        assert_eq!(child.len(), 4);
        assert_ne!(parent.as_ptr(), child.as_ptr());
    }

    #[test]
    fn test_fields_replace_keeps_position() {
        let mut fields = Fields::new();
        fields.set("a", 1);
        fields.set("b", 2);
        fields.set("a", 3);
        assert_eq!(
            fields.into_pairs(),
            vec![Value::from("a"), Value::from(3), Value::from("b"), Value::from(2)]
        );
    }
}
