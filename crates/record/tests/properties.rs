//! Property tests for the record invariants.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::DateTime;
use keyed_record::{Builder, Entries, Key, KeyFamily, KeySet, Mutable, OverheadPolicy, Record, RecordError, Value, cast};
use proptest::prelude::*;

keyed_record::keys! {
	/// Properties of a sampled document.
	pub enum Field {
		Title: Text = "untitled",
		Pages: Int = 1,
		Score: Option<Float> = None,
		Draft: Bool = true,
		Published: Option<Date> = None,
		Extra: Option<Any> = None,
	}
}

fn arb_value() -> impl Strategy<Value = Value> {
	prop_oneof![
		any::<bool>().prop_map(Value::Bool),
		any::<i64>().prop_map(Value::Int),
		any::<f64>().prop_map(Value::Float),
		"[a-z\"\\\\ ]{0,8}".prop_map(Value::Text),
		(0i64..4_000_000_000).prop_map(|secs| Value::Date(DateTime::from_timestamp(secs, 0).unwrap())),
	]
}

fn arb_field() -> impl Strategy<Value = Field> {
	prop::sample::select(Field::all().to_vec())
}

fn arb_source() -> impl Strategy<Value = Entries<Field>> {
	prop::collection::btree_map(arb_field(), prop::option::of(arb_value()), 0..6)
}

fn arb_key_set() -> impl Strategy<Value = KeySet<Field>> {
	prop::sample::subsequence(Field::all().to_vec(), 0..=Field::all().len())
		.prop_map(|fields| KeySet::new(fields).unwrap())
}

/// Sources whose in-set values all pass validation.
fn arb_valid_source(keys: KeySet<Field>) -> impl Strategy<Value = Entries<Field>> {
	arb_source().prop_map(move |source| {
		source
			.into_iter()
			.filter(|(key, value)| keys.contains(key) && cast(*key, value.clone()).is_ok())
			.collect()
	})
}

fn hash_of<T: Hash>(value: &T) -> u64 {
	let mut hasher = DefaultHasher::new();
	value.hash(&mut hasher);
	hasher.finish()
}

proptest! {
	/// A successful construction covers exactly the key set with valid values.
	#[test]
	fn prop_records_are_total_and_typed(keys in arb_key_set(), source in arb_source()) {
		if let Ok(record) = Record::new_with(keys.clone(), &source, OverheadPolicy::Ignore) {
			prop_assert!(record.as_map().keys().copied().eq(keys.iter()));
			for (key, value) in record.iter() {
				prop_assert!(cast(key, value.cloned()).is_ok());
			}
		}
	}

	/// Construction succeeds exactly when every in-set source value is valid.
	#[test]
	fn prop_construction_fails_only_on_invalid_values(keys in arb_key_set(), source in arb_source()) {
		let valid = source
			.iter()
			.filter(|(key, _)| keys.contains(key))
			.all(|(key, value)| cast(*key, value.clone()).is_ok());
		let result = Record::new_with(keys, &source, OverheadPolicy::Ignore);
		prop_assert_eq!(result.is_ok(), valid);
		if let Err(error) = result {
			let is_value_error = matches!(error, RecordError::NullValue { .. } | RecordError::TypeMismatch { .. });
			prop_assert!(is_value_error);
		}
	}

	/// Rejection names exactly the source keys outside the key set.
	#[test]
	fn prop_overhead_is_reported_exactly(keys in arb_key_set(), source in arb_source()) {
		let excess: Vec<Field> = source.keys().copied().filter(|key| !keys.contains(key)).collect();
		match Record::new(keys, &source) {
			Err(RecordError::UnknownKeys(reported)) => prop_assert_eq!(reported, excess),
			_ => prop_assert!(excess.is_empty()),
		}
	}

	/// Explicit source values win, the rest take their initial value.
	#[test]
	fn prop_construction_prefers_source_values(
		(keys, source) in arb_key_set().prop_flat_map(|keys| (Just(keys.clone()), arb_valid_source(keys)))
	) {
		let record = Record::new(keys.clone(), &source).unwrap();
		for key in &keys {
			let expected = source.get(&key).cloned().unwrap_or_else(|| key.initial());
			prop_assert_eq!(record.get(key).unwrap(), expected.as_ref());
		}
	}

	/// Rebuilding a record through a builder or its own map yields an equal record.
	#[test]
	fn prop_round_trip_preserves_records(
		(keys, source) in arb_key_set().prop_flat_map(|keys| (Just(keys.clone()), arb_valid_source(keys)))
	) {
		let record = Record::new(keys.clone(), &source).unwrap();
		prop_assert_eq!(&Builder::from(&record).build(), &record);
		prop_assert_eq!(&Record::new(keys, record.as_map()).unwrap(), &record);
	}

	/// Equal records hash equally.
	#[test]
	fn prop_equal_records_hash_equally(
		(keys, source) in arb_key_set().prop_flat_map(|keys| (Just(keys.clone()), arb_valid_source(keys)))
	) {
		let a = Record::new(keys.clone(), &source).unwrap();
		let b = Builder::from_template(keys, &source).unwrap().build();
		prop_assert_eq!(&a, &b);
		prop_assert_eq!(hash_of(&a), hash_of(&b));
	}

	/// A merge overwrites the merged keys and keeps every other value.
	#[test]
	fn prop_merge_keeps_unmentioned_keys(
		first in arb_valid_source(KeySet::all().unwrap()),
		second in arb_valid_source(KeySet::all().unwrap()),
	) {
		let mut builder = Builder::<Field>::for_family().unwrap();
		builder.set_all(&first).unwrap();
		let before = builder.as_map().clone();
		builder.set_all(&second).unwrap();

		for key in Field::all() {
			let expected = second.get(key).or_else(|| before.get(key)).unwrap();
			prop_assert_eq!(builder.get(*key).unwrap(), expected.as_ref());
		}
	}

	/// A rejected mutation never changes the builder.
	#[test]
	fn prop_failed_mutation_is_atomic(field in arb_field(), value in prop::option::of(arb_value())) {
		let mut builder = Builder::new(KeySet::new([Field::Title, Field::Pages]).unwrap());
		let before = builder.build();
		if builder.set(field, value).is_err() {
			prop_assert_eq!(builder.build(), before);
		}
	}
}
