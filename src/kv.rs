// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The module for the structured fields attached to log calls.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use value_bag::OwnedValueBag;
use value_bag::ValueBag;

use crate::Error;

/// Represents a value in a key-value pair.
pub type Value<'a> = ValueBag<'a>;

/// Represents a key in a key-value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key<'a>(&'a str);

impl<'a> Key<'a> {
    /// Create a key borrowing the given string.
    pub const fn new(key: &'a str) -> Self {
        Key(key)
    }

    /// Gets the key string.
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(key: &'a str) -> Self {
        Key(key)
    }
}

/// A visitor to walk through the fields of a [`Fields`] set.
pub trait Visitor {
    /// Visit a key-value pair.
    fn visit(&mut self, key: Key, value: Value) -> Result<(), Error>;
}

// An owned value that can be lent out as a `Display` with the lifetime of its holder.
#[derive(Clone)]
pub(crate) struct FieldValue(OwnedValueBag);

impl FieldValue {
    pub(crate) fn by_ref(&self) -> Value<'_> {
        self.0.by_ref()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.by_ref(), f)
    }
}

/// A set of structured fields attached to subsequent log calls.
///
/// Keys are unique. A `Fields` value never changes once it has been handed to an emitter:
/// [`merge`](Fields::merge) returns a new set, and cloning only bumps a reference count.
///
/// # Examples
///
/// ```
/// use logface::kv::Fields;
///
/// let fields = Fields::new().with("user", "alice").with("attempt", 3);
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.get("attempt").unwrap().to_string(), "3");
/// ```
#[derive(Clone, Default)]
pub struct Fields {
    map: Arc<BTreeMap<String, FieldValue>>,
}

impl Fields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this set with `key` bound to `value`, replacing any previous binding.
    pub fn with<'v>(mut self, key: impl Into<String>, value: impl Into<Value<'v>>) -> Self {
        let value = FieldValue(value.into().to_owned());
        Arc::make_mut(&mut self.map).insert(key.into(), value);
        self
    }

    /// Like [`with`](Fields::with), capturing any [`Display`](fmt::Display) value.
    pub fn with_display(mut self, key: impl Into<String>, value: &impl fmt::Display) -> Self {
        let value = FieldValue(ValueBag::from_dyn_display(value).to_owned());
        Arc::make_mut(&mut self.map).insert(key.into(), value);
        self
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set holds no field.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether the set holds a field named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Look up the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<Value<'_>> {
        self.map.get(key).map(FieldValue::by_ref)
    }

    /// Iterate over the fields in key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Key<'_>, Value<'_>)> {
        self.map
            .iter()
            .map(|(k, v)| (Key::new(k.as_str()), v.by_ref()))
    }

    #[cfg(feature = "bridge-log")]
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Return the union of `self` and `other`; on a key collision the value from `other` wins.
    ///
    /// Neither operand is modified. When one side is empty the other one is shared as is.
    pub fn merge(&self, other: &Fields) -> Fields {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut map = BTreeMap::clone(&self.map);
        for (k, v) in other.map.iter() {
            map.insert(k.clone(), v.clone());
        }
        Fields { map: Arc::new(map) }
    }

    /// Walk every field with the given visitor, stopping at the first error.
    ///
    /// The returned error names the key the visitor failed on.
    pub fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        for (key, value) in self.iter() {
            visitor
                .visit(key, value)
                .map_err(|err| err.at_key(key.as_str()))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.map.iter().map(|(k, v)| (k, v.by_ref())))
            .finish()
    }
}

impl<'v, K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value<'v>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Fields::new(), |fields, (k, v)| fields.with(k, v))
    }
}

impl<'v, K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<Value<'v>>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
