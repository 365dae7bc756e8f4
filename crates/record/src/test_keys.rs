//! Key families shared by the unit tests.

use chrono::{DateTime, Utc};

use crate::typed_key::TypedKey;
use crate::{Value, keys};

keys! {
	/// Two non-nullable properties.
	pub enum Pair {
		Text: Text = "",
		Integer: Int = 0,
	}
}

keys! {
	/// One key of every kind.
	pub enum Probe {
		Name: Text = "",
		Count: Int = 0,
		Ratio: Option<Float> = 0.0,
		Stamp: Option<Date> = None,
		Flag: Bool = false,
		Payload: Option<Any> = None,
	}
}

keys! {
	/// A key whose initial value violates its own declaration.
	pub enum Broken {
		Fine: Int = 1,
		Wrong: Int = "one",
	}
}

pub const NAME: TypedKey<Probe, String> = TypedKey::new(Probe::Name);
pub const COUNT: TypedKey<Probe, i64> = TypedKey::new(Probe::Count);
pub const STAMP: TypedKey<Probe, DateTime<Utc>> = TypedKey::new(Probe::Stamp);
pub const PAYLOAD: TypedKey<Probe, Value> = TypedKey::new(Probe::Payload);
