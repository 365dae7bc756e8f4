//! Key descriptors and key sets.
//!
//! A [`Key`] describes one property: the type its values must have, whether
//! it may be `null`, and the value it takes when none is supplied. A
//! [`KeySet`] is the closed schema of one record family.

use std::collections::{BTreeSet, btree_set};
use std::iter::Copied;
use std::sync::Arc;

use crate::copy::{Entries, cast};
use crate::error::{RecordError, Result};
use crate::value::{Value, ValueType};


/// Descriptor of a single record property.
///
/// Usually implemented by a fieldless enum, one variant per property, either
/// by hand or through the [`keys!`](crate::keys) macro. The `Ord` impl
/// determines iteration and rendering order of records.
///
/// The [`initial`](Key::initial) value must itself satisfy
/// [`nullable`](Key::nullable) and [`value_type`](Key::value_type); this is
/// checked whenever a [`KeySet`] containing the key is created.
pub trait Key: Copy + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display + 'static {
	/// The type every non-null value of this property must have.
	fn value_type(&self) -> ValueType;

	/// Whether `null` is an acceptable value.
	fn nullable(&self) -> bool;

	/// The value substituted when none is supplied.
	fn initial(&self) -> Option<Value>;
}

/// A key type that enumerates its complete, closed set of keys.
pub trait KeyFamily: Key {
	/// Every key of this family.
	fn all() -> &'static [Self];
}

/// An immutable, shared set of keys forming the schema of a record.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySet<K: Key> {
	keys: Arc<BTreeSet<K>>,
}

impl<K: Key> KeySet<K> {
	/// Creates a key set from an explicit collection of keys.
	///
	/// The collection may be empty. Duplicates collapse.
	///
	/// # Errors
	///
	/// Returns [`RecordError::NullValue`] or [`RecordError::TypeMismatch`] if
	/// a key's initial value violates its own declaration.
	pub fn new(keys: impl IntoIterator<Item = K>) -> Result<Self, K> {
		Self::validated(keys.into_iter().collect())
	}

	/// Infers a key set from a collection of keys that must not be empty.
	///
	/// # Errors
	///
	/// Returns [`RecordError::EmptyKeySet`] for an empty collection, or the
	/// errors of [`KeySet::new`].
	pub fn infer(keys: impl IntoIterator<Item = K>) -> Result<Self, K> {
		let keys: BTreeSet<K> = keys.into_iter().collect();
		if keys.is_empty() {
			return Err(RecordError::EmptyKeySet);
		}
		Self::validated(keys)
	}

	/// Creates the key set of every key in the family.
	///
	/// # Errors
	///
	/// See [`KeySet::new`].
	pub fn all() -> Result<Self, K>
	where
		K: KeyFamily,
	{
		Self::new(K::all().iter().copied())
	}

	fn validated(keys: BTreeSet<K>) -> Result<Self, K> {
		for &key in &keys {
			cast(key, key.initial())?;
		}
		Ok(Self {
			keys: Arc::new(keys),
		})
	}

	/// Returns true if `key` belongs to this set.
	pub fn contains(&self, key: &K) -> bool {
		self.keys.contains(key)
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns true if the set has no keys.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Iterates the keys in key order.
	pub fn iter(&self) -> Copied<btree_set::Iter<'_, K>> {
		self.keys.iter().copied()
	}

	/// Returns a total mapping of every key to its initial value.
	pub fn initial_entries(&self) -> Entries<K> {
		self.iter().map(|key| (key, key.initial())).collect()
	}
}

impl<'a, K: Key> IntoIterator for &'a KeySet<K> {
	type Item = K;
	type IntoIter = Copied<btree_set::Iter<'a, K>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K: Key> core::fmt::Display for KeySet<K> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&crate::render::key_list(self.iter()))
	}
}
