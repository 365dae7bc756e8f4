use std::marker::PhantomData;

use crate::key::Key;
use crate::value::FromValue;

/// Typed handle to a key with compile-time value type information.
///
/// Records and builders stay type-erased internally; reading or writing
/// through a `TypedKey` converts at the call site.
pub struct TypedKey<K: Key, T: FromValue> {
	key: K,
	_marker: PhantomData<fn() -> T>,
}

impl<K: Key, T: FromValue> Clone for TypedKey<K, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<K: Key, T: FromValue> Copy for TypedKey<K, T> {}

impl<K: Key, T: FromValue> core::fmt::Debug for TypedKey<K, T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("TypedKey")
			.field(&self.key)
			.field(&T::value_type())
			.finish()
	}
}

impl<K: Key, T: FromValue> TypedKey<K, T> {
	/// Creates a typed handle for `key`.
	pub const fn new(key: K) -> Self {
		Self {
			key,
			_marker: PhantomData,
		}
	}

	/// Returns the untyped key.
	pub fn key(&self) -> K {
		self.key
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_keys::{COUNT, NAME, Probe};
	use crate::value::ValueType;

	#[test]
	fn typed_key_exposes_untyped_key() {
		assert_eq!(NAME.key(), Probe::Name);
		assert_eq!(COUNT.key(), Probe::Count);
	}

	#[test]
	fn debug_names_key_and_value_type() {
		let key: TypedKey<Probe, f64> = TypedKey::new(Probe::Ratio);
		assert_eq!(format!("{key:?}"), format!("TypedKey(Ratio, {:?})", ValueType::Float));
	}
}
