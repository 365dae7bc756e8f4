//! Error types for record construction and access.

use thiserror::Error;

use crate::key::Key;
use crate::render;
use crate::value::ValueType;

/// Errors raised while validating, copying or reading record values.
///
/// Generic over the key type so every variant carries the offending keys
/// themselves rather than their names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError<K: Key> {
	/// Keys outside the active key set were referenced.
	///
	/// Always lists the complete set of offending keys, in key order.
	#[error("unknown keys: {}", render::key_list(.0))]
	UnknownKeys(Vec<K>),

	/// `null` was supplied for a key that is not nullable.
	#[error("value for key '{key}' must not be null")]
	NullValue {
		/// The non-nullable key.
		key: K,
	},

	/// A value is not an instance of the key's declared type.
	#[error("type mismatch for key '{key}': expected {expected}, got {got}")]
	TypeMismatch {
		/// The key the value was supplied for.
		key: K,
		/// The key's declared type.
		expected: ValueType,
		/// The type of the supplied value.
		got: ValueType,
	},

	/// A key set was to be inferred from an empty collection of keys.
	#[error("cannot infer a key set from an empty collection of keys")]
	EmptyKeySet,
}

/// Result type for record operations.
pub type Result<T, K> = std::result::Result<T, RecordError<K>>;
