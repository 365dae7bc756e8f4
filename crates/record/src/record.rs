//! The immutable keyed record.

use core::hash::{Hash, Hasher};

use crate::builder::{Builder, Mutable};
use crate::copy::{Entries, MissingPolicy, OverheadPolicy, copy};
use crate::error::{RecordError, Result};
use crate::key::{Key, KeySet};
use crate::typed_key::TypedKey;
use crate::value::{FromValue, Value};


/// An immutable mapping from every key of a [`KeySet`] to exactly one value.
///
/// # Invariants
///
/// - Total: holds an entry for every key of its key set and no other.
/// - Typed: each value is `None` only for nullable keys and otherwise an
///   instance of its key's value type.
///
/// Equality and hashing are structural over the entries.
#[derive(Debug, Clone)]
pub struct Record<K: Key> {
	keys: KeySet<K>,
	entries: Entries<K>,
}

impl<K: Key> Record<K> {
	/// Creates a record from a template, rejecting template keys outside
	/// `keys`. Keys the template lacks take their initial value.
	///
	/// # Errors
	///
	/// See [`copy`].
	pub fn new(keys: KeySet<K>, template: &Entries<K>) -> Result<Self, K> {
		Self::new_with(keys, template, OverheadPolicy::Reject)
	}

	/// Creates a record from a template with an explicit overhead policy.
	///
	/// # Errors
	///
	/// See [`copy`].
	pub fn new_with(keys: KeySet<K>, template: &Entries<K>, overhead: OverheadPolicy) -> Result<Self, K> {
		let mut entries = Entries::new();
		copy(template, &keys, MissingPolicy::Reset, overhead, &mut entries)?;
		Ok(Self { keys, entries })
	}

	/// Creates a record from the current state of any [`Mutable`].
	///
	/// The state is revalidated against the mutable's key set.
	///
	/// # Errors
	///
	/// See [`copy`].
	pub fn from_mutable<M: Mutable<K> + ?Sized>(source: &M) -> Result<Self, K> {
		Self::new(source.key_set().clone(), source.entries())
	}

	/// Assembles a record from parts already known to satisfy the invariants.
	pub(crate) fn from_parts(keys: KeySet<K>, entries: Entries<K>) -> Self {
		debug_assert_eq!(keys.len(), entries.len());
		Self { keys, entries }
	}

	/// Returns the value stored for `key`.
	///
	/// # Errors
	///
	/// [`RecordError::UnknownKeys`] if `key` is outside this record's key set.
	pub fn get(&self, key: K) -> Result<Option<&Value>, K> {
		lookup(&self.entries, key)
	}

	/// Returns the value stored for a typed key, converted to `T`.
	///
	/// # Errors
	///
	/// [`RecordError::UnknownKeys`] for a foreign key,
	/// [`RecordError::TypeMismatch`] if the stored value is not a `T`.
	pub fn get_as<T: FromValue>(&self, key: TypedKey<K, T>) -> Result<Option<T>, K> {
		lookup_as(&self.entries, key)
	}

	/// Read-only view of every entry.
	pub fn as_map(&self) -> &Entries<K> {
		&self.entries
	}

	/// The key set this record is total over.
	pub fn key_set(&self) -> &KeySet<K> {
		&self.keys
	}

	/// Returns true if `key` belongs to this record.
	pub fn contains_key(&self, key: K) -> bool {
		self.keys.contains(&key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the record has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (K, Option<&Value>)> {
		self.entries.iter().map(|(key, value)| (*key, value.as_ref()))
	}

	/// Returns a builder seeded with this record's keys and values.
	pub fn to_builder(&self) -> Builder<K> {
		Builder::from_parts(self.keys.clone(), self.entries.clone())
	}
}

impl<K: Key> PartialEq for Record<K> {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl<K: Key> Eq for Record<K> {}

impl<K: Key> Hash for Record<K> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.entries.hash(state);
	}
}

impl<K: Key> core::fmt::Display for Record<K> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		crate::render::write_entries(f, &self.entries)
	}
}

pub(crate) fn lookup<K: Key>(entries: &Entries<K>, key: K) -> Result<Option<&Value>, K> {
	entries
		.get(&key)
		.map(Option::as_ref)
		.ok_or_else(|| RecordError::UnknownKeys(vec![key]))
}

pub(crate) fn lookup_as<K: Key, T: FromValue>(entries: &Entries<K>, key: TypedKey<K, T>) -> Result<Option<T>, K> {
	let Some(value) = lookup(entries, key.key())? else {
		return Ok(None);
	};
	T::from_value(value)
		.map(Some)
		.ok_or_else(|| RecordError::TypeMismatch {
			key: key.key(),
			expected: T::value_type(),
			got: value.value_type(),
		})
}
