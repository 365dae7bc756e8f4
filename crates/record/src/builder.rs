//! Mutable record builders.
//!
//! [`Mutable`] is the builder supertype: an implementor exposes its key set
//! and backing entries, and receives every validating, fluent mutation as a
//! provided method returning the implementor's own type. [`Builder`] is the
//! stock implementation.

use crate::copy::{Entries, MissingPolicy, OverheadPolicy, copy};
use crate::error::Result;
use crate::key::{Key, KeyFamily, KeySet};
use crate::record::{Record, lookup, lookup_as};
use crate::typed_key::TypedKey;
use crate::value::{FromValue, IntoValue, Value};


/// Write access to a builder's backing entries.
///
/// Only the validated operations of this crate can write through a
/// `Backing`, so holding one never allows storing an unchecked value.
pub struct Backing<'a, K: Key> {
	keys: &'a KeySet<K>,
	entries: &'a mut Entries<K>,
}

impl<'a, K: Key> Backing<'a, K> {
	/// Wraps a key set and the entries validated against it.
	pub fn new(keys: &'a KeySet<K>, entries: &'a mut Entries<K>) -> Self {
		Self { keys, entries }
	}

	fn apply(self, source: &Entries<K>, missing: MissingPolicy, overhead: OverheadPolicy) -> Result<(), K> {
		copy(source, self.keys, missing, overhead, self.entries)?;
		Ok(())
	}

	// Initial values are validated when the key set is created.
	fn reset_to_initial(self) {
		*self.entries = self.keys.initial_entries();
	}
}

/// A mutable record-in-progress.
///
/// Every mutation validates through [`copy`] and fails without writing
/// anything. Mutations return `&mut Self`, so calls chain with `?`:
///
/// ```ignore
/// builder.set(Contact::Name, "Ada")?.set(Contact::Age, 36)?;
/// ```
pub trait Mutable<K: Key> {
	/// The closed key set of this builder.
	fn key_set(&self) -> &KeySet<K>;

	/// Read-only view of the current entries.
	fn entries(&self) -> &Entries<K>;

	/// Validated write access to the entries.
	fn backing(&mut self) -> Backing<'_, K>;

	/// Returns the current value for `key`.
	///
	/// # Errors
	///
	/// [`RecordError::UnknownKeys`](crate::RecordError::UnknownKeys) for a
	/// foreign key.
	fn get(&self, key: K) -> Result<Option<&Value>, K> {
		lookup(self.entries(), key)
	}

	/// Returns the current value for a typed key, converted to `T`.
	///
	/// # Errors
	///
	/// See [`Record::get_as`].
	fn get_as<T: FromValue>(&self, key: TypedKey<K, T>) -> Result<Option<T>, K> {
		lookup_as(self.entries(), key)
	}

	/// Sets a single value, rejecting a key outside the key set.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn set<V: IntoValue>(&mut self, key: K, value: V) -> Result<&mut Self, K> {
		self.set_with(key, value, OverheadPolicy::Reject)
	}

	/// Sets a single value. Under [`OverheadPolicy::Ignore`] a key outside
	/// the key set is dropped.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn set_with<V: IntoValue>(&mut self, key: K, value: V, overhead: OverheadPolicy) -> Result<&mut Self, K> {
		let source = Entries::from([(key, value.into_value())]);
		self.backing().apply(&source, MissingPolicy::Keep, overhead)?;
		Ok(self)
	}

	/// Stores `null` for `key`.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn set_null(&mut self, key: K) -> Result<&mut Self, K> {
		self.set(key, None)
	}

	/// Sets a single value through a typed key.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn set_typed<T: FromValue + Into<Value>>(&mut self, key: TypedKey<K, T>, value: T) -> Result<&mut Self, K> {
		let value: Value = value.into();
		self.set(key.key(), value)
	}

	/// Merges `source`: keys present in it are set, all others keep their
	/// current value. Source keys outside the key set are rejected.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn set_all(&mut self, source: &Entries<K>) -> Result<&mut Self, K> {
		self.set_all_with(source, OverheadPolicy::Reject)
	}

	/// Merges `source` with an explicit overhead policy.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn set_all_with(&mut self, source: &Entries<K>, overhead: OverheadPolicy) -> Result<&mut Self, K> {
		self.backing().apply(source, MissingPolicy::Keep, overhead)?;
		Ok(self)
	}

	/// Resets every key: keys present in `source` take its value, all others
	/// their initial value. Source keys outside the key set are rejected.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn reset(&mut self, source: &Entries<K>) -> Result<&mut Self, K> {
		self.reset_with(source, OverheadPolicy::Reject)
	}

	/// Resets every key with an explicit overhead policy.
	///
	/// # Errors
	///
	/// See [`copy`].
	fn reset_with(&mut self, source: &Entries<K>, overhead: OverheadPolicy) -> Result<&mut Self, K> {
		self.backing().apply(source, MissingPolicy::Reset, overhead)?;
		Ok(self)
	}

	/// Resets every key to its initial value.
	fn clear(&mut self) -> &mut Self {
		self.backing().reset_to_initial();
		self
	}
}

/// The stock [`Mutable`] implementation.
#[derive(Debug, Clone)]
pub struct Builder<K: Key> {
	keys: KeySet<K>,
	entries: Entries<K>,
}

impl<K: Key> Builder<K> {
	/// Creates a builder holding every key's initial value.
	pub fn new(keys: KeySet<K>) -> Self {
		let entries = keys.initial_entries();
		Self { keys, entries }
	}

	/// Creates a builder from a template, rejecting template keys outside
	/// `keys`. Keys the template lacks take their initial value.
	///
	/// # Errors
	///
	/// See [`copy`].
	pub fn from_template(keys: KeySet<K>, template: &Entries<K>) -> Result<Self, K> {
		Self::from_template_with(keys, template, OverheadPolicy::Reject)
	}

	/// Creates a builder from a template with an explicit overhead policy.
	///
	/// # Errors
	///
	/// See [`copy`].
	pub fn from_template_with(keys: KeySet<K>, template: &Entries<K>, overhead: OverheadPolicy) -> Result<Self, K> {
		let mut builder = Self::new(keys);
		builder.reset_with(template, overhead)?;
		Ok(builder)
	}

	/// Creates a builder over a key set inferred from `keys`.
	///
	/// # Errors
	///
	/// See [`KeySet::infer`].
	pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Result<Self, K> {
		Ok(Self::new(KeySet::infer(keys)?))
	}

	/// Creates a builder over every key of the family.
	///
	/// # Errors
	///
	/// See [`KeySet::new`].
	pub fn for_family() -> Result<Self, K>
	where
		K: KeyFamily,
	{
		Ok(Self::new(KeySet::all()?))
	}

	pub(crate) fn from_parts(keys: KeySet<K>, entries: Entries<K>) -> Self {
		Self { keys, entries }
	}

	/// Read-only view of the current entries.
	pub fn as_map(&self) -> &Entries<K> {
		&self.entries
	}

	/// Snapshots the current state into an immutable [`Record`].
	///
	/// The builder is not consumed; later mutations never affect records
	/// built before them.
	pub fn build(&self) -> Record<K> {
		tracing::trace!(domain = "record", keys = %self.keys, "building record");
		Record::from_parts(self.keys.clone(), self.entries.clone())
	}
}

impl<K: Key> Mutable<K> for Builder<K> {
	fn key_set(&self) -> &KeySet<K> {
		&self.keys
	}

	fn entries(&self) -> &Entries<K> {
		&self.entries
	}

	fn backing(&mut self) -> Backing<'_, K> {
		Backing::new(&self.keys, &mut self.entries)
	}
}

impl<K: Key> From<&Record<K>> for Builder<K> {
	fn from(record: &Record<K>) -> Self {
		record.to_builder()
	}
}

impl<K: Key> core::fmt::Display for Builder<K> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		crate::render::write_entries(f, &self.entries)
	}
}
