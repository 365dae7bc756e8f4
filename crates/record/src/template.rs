//! Fluent assembly of source entries.

use crate::copy::Entries;
use crate::key::Key;
use crate::value::IntoValue;

/// Builds source [`Entries`] for templates, merges and resets.
///
/// A template is unvalidated: it may hold keys of any key set and values of
/// any type. Validation happens when it is applied to a record or builder.
///
/// ```ignore
/// let patch = Template::new()
///     .put(Contact::Name, "Ada")
///     .put_null(Contact::Email)
///     .build();
/// builder.set_all(&patch)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<K: Key> {
	entries: Entries<K>,
}

impl<K: Key> Default for Template<K> {
	fn default() -> Self {
		Self {
			entries: Entries::new(),
		}
	}
}

impl<K: Key> Template<K> {
	/// Creates an empty template.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces the entry for `key`.
	pub fn put<V: IntoValue>(mut self, key: K, value: V) -> Self {
		self.entries.insert(key, value.into_value());
		self
	}

	/// Adds or replaces the entry for `key` with an explicit `null`.
	pub fn put_null(self, key: K) -> Self {
		self.put(key, None)
	}

	/// Adds or replaces every entry of `entries`.
	pub fn put_all(mut self, entries: &Entries<K>) -> Self {
		self.entries
			.extend(entries.iter().map(|(key, value)| (*key, value.clone())));
		self
	}

	/// Removes the entry for `key`, if any.
	pub fn remove(mut self, key: K) -> Self {
		self.entries.remove(&key);
		self
	}

	/// Read-only view of the assembled entries.
	pub fn as_map(&self) -> &Entries<K> {
		&self.entries
	}

	/// Returns the assembled entries.
	pub fn build(self) -> Entries<K> {
		self.entries
	}
}

impl<K: Key> From<Template<K>> for Entries<K> {
	fn from(template: Template<K>) -> Self {
		template.entries
	}
}

impl<K: Key> FromIterator<(K, Option<crate::Value>)> for Template<K> {
	fn from_iter<I: IntoIterator<Item = (K, Option<crate::Value>)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}
