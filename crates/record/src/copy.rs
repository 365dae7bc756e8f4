//! The validating copy primitive shared by records and builders.
//!
//! Every value that enters a [`Record`](crate::Record) or a
//! [`Builder`](crate::Builder) passes through [`copy`] (or its single-value
//! step [`cast`]), so both accept exactly the same values.

use std::collections::BTreeMap;

use crate::error::{RecordError, Result};
use crate::key::{Key, KeySet};
use crate::value::Value;


/// A key to value mapping. An entry holding `None` is an explicit `null`;
/// a missing entry means the value was not supplied.
pub type Entries<K> = BTreeMap<K, Option<Value>>;

/// What [`copy`] does with keys of the key set that the source lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
	/// Assign the key's initial value.
	Reset,
	/// Leave the target's current value untouched.
	Keep,
}

/// What [`copy`] does with source keys outside the key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverheadPolicy {
	/// Fail with [`RecordError::UnknownKeys`].
	#[default]
	Reject,
	/// Drop them.
	Ignore,
}

/// Validates a single value against `key`.
///
/// # Errors
///
/// [`RecordError::NullValue`] for `None` on a non-nullable key,
/// [`RecordError::TypeMismatch`] for a value that is not an instance of the
/// key's value type.
pub fn cast<K: Key>(key: K, value: Option<Value>) -> Result<Option<Value>, K> {
	match value {
		None if key.nullable() => Ok(None),
		None => Err(RecordError::NullValue { key }),
		Some(value) if value.is_instance_of(key.value_type()) => Ok(Some(value)),
		Some(value) => Err(RecordError::TypeMismatch {
			key,
			expected: key.value_type(),
			got: value.value_type(),
		}),
	}
}

/// Returns the source keys outside `keys`, in key order.
pub fn overhead<K: Key, V>(source: &BTreeMap<K, V>, keys: &KeySet<K>) -> Vec<K> {
	source.keys().filter(|key| !keys.contains(key)).copied().collect()
}

/// Copies values from `source` into `target`, restricted to `keys`.
///
/// For each key of `keys`, an explicit source entry wins; otherwise
/// [`MissingPolicy::Reset`] takes the key's initial value and
/// [`MissingPolicy::Keep`] leaves `target` untouched. Every selected value is
/// validated with [`cast`].
///
/// All values are validated before the first write, so on error `target` is
/// unchanged.
///
/// # Errors
///
/// [`RecordError::UnknownKeys`] listing every source key outside `keys` under
/// [`OverheadPolicy::Reject`], or the first error of [`cast`].
pub fn copy<'t, K: Key>(
	source: &Entries<K>,
	keys: &KeySet<K>,
	missing: MissingPolicy,
	overhead_policy: OverheadPolicy,
	target: &'t mut Entries<K>,
) -> Result<&'t mut Entries<K>, K> {
	let excess = overhead(source, keys);
	if !excess.is_empty() {
		match overhead_policy {
			OverheadPolicy::Reject => {
				tracing::debug!(
					domain = "record",
					keys = %keys,
					excess = ?excess,
					"source contains unknown keys",
				);
				return Err(RecordError::UnknownKeys(excess));
			}
			OverheadPolicy::Ignore => {
				tracing::trace!(domain = "record", excess = ?excess, "ignoring overhead keys");
			}
		}
	}

	let mut staged = Vec::with_capacity(keys.len());
	for key in keys {
		let selected = match source.get(&key) {
			Some(value) => value.clone(),
			None => match missing {
				MissingPolicy::Reset => key.initial(),
				MissingPolicy::Keep => continue,
			},
		};
		let value = cast(key, selected).inspect_err(|error| {
			tracing::debug!(domain = "record", key = %key, %error, "value rejected");
		})?;
		staged.push((key, value));
	}

	target.extend(staged);
	Ok(target)
}
