//! Type-erased property values and their declared types.

use core::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};


/// The value of a property.
///
/// Absence of a value (`null`) is not a variant; it is expressed as
/// `Option::<Value>::None` wherever a property may be unset.
#[derive(Debug, Clone)]
pub enum Value {
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value. Compared and hashed by bit pattern.
	Float(f64),
	/// Text value.
	Text(String),
	/// UTC timestamp.
	Date(DateTime<Utc>),
}

impl Value {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the text if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the timestamp if this is a `Date` variant.
	pub fn as_date(&self) -> Option<DateTime<Utc>> {
		match self {
			Value::Date(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the concrete type of this value. Never [`ValueType::Any`].
	pub fn value_type(&self) -> ValueType {
		match self {
			Value::Bool(_) => ValueType::Bool,
			Value::Int(_) => ValueType::Int,
			Value::Float(_) => ValueType::Float,
			Value::Text(_) => ValueType::Text,
			Value::Date(_) => ValueType::Date,
		}
	}

	/// Returns true if this value is an instance of `ty`.
	pub fn is_instance_of(&self, ty: ValueType) -> bool {
		ty.accepts(self)
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.value_type().name()
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Int(a), Value::Int(b)) => a == b,
			(Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
			(Value::Text(a), Value::Text(b)) => a == b,
			(Value::Date(a), Value::Date(b)) => a == b,
			_ => false,
		}
	}
}

impl Eq for Value {}

impl Hash for Value {
	fn hash<H: Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			Value::Bool(v) => v.hash(state),
			Value::Int(v) => v.hash(state),
			Value::Float(v) => v.to_bits().hash(state),
			Value::Text(v) => v.hash(state),
			Value::Date(v) => v.hash(state),
		}
	}
}

impl core::fmt::Display for Value {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		crate::render::write_value(f, Some(self))
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v.into())
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(v: DateTime<Utc>) -> Self {
		Value::Date(v)
	}
}

/// The declared type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// Floating point type.
	Float,
	/// Text type.
	Text,
	/// Timestamp type.
	Date,
	/// Accepts every non-null value.
	Any,
}

impl ValueType {
	/// Returns the lowercase name of this type.
	pub fn name(self) -> &'static str {
		match self {
			ValueType::Bool => "bool",
			ValueType::Int => "int",
			ValueType::Float => "float",
			ValueType::Text => "text",
			ValueType::Date => "date",
			ValueType::Any => "any",
		}
	}

	/// Returns true if `value` is an instance of this type.
	pub fn accepts(self, value: &Value) -> bool {
		self == ValueType::Any || value.value_type() == self
	}
}

impl core::fmt::Display for ValueType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// Conversion into a possibly absent property value.
///
/// `None` converts to an absent value, which makes `builder.set(key, None)`
/// a request to store `null`.
pub trait IntoValue {
	/// Converts `self` into a property value, `None` meaning `null`.
	fn into_value(self) -> Option<Value>;
}

impl IntoValue for Value {
	fn into_value(self) -> Option<Value> {
		Some(self)
	}
}

impl IntoValue for Option<Value> {
	fn into_value(self) -> Option<Value> {
		self
	}
}

macro_rules! into_value_via_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Option<Value> {
					Some(Value::from(self))
				}
			}
		)*
	};
}

into_value_via_from!(bool, i64, i32, f64, String, &str, DateTime<Utc>);

// Seal the FromValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for f64 {}
	impl Sealed for String {}
	impl Sealed for chrono::DateTime<chrono::Utc> {}
	impl Sealed for super::Value {}
}

/// Trait for Rust types that can be extracted from a [`Value`].
pub trait FromValue: sealed::Sealed + Sized {
	/// Extracts the value, returning `None` if the type doesn't match.
	fn from_value(value: &Value) -> Option<Self>;

	/// Returns the `ValueType` corresponding to this Rust type.
	fn value_type() -> ValueType;
}

impl FromValue for bool {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}

	fn value_type() -> ValueType {
		ValueType::Bool
	}
}

impl FromValue for i64 {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_int()
	}

	fn value_type() -> ValueType {
		ValueType::Int
	}
}

impl FromValue for f64 {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_float()
	}

	fn value_type() -> ValueType {
		ValueType::Float
	}
}

impl FromValue for String {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_str().map(str::to_string)
	}

	fn value_type() -> ValueType {
		ValueType::Text
	}
}

impl FromValue for DateTime<Utc> {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_date()
	}

	fn value_type() -> ValueType {
		ValueType::Date
	}
}

impl FromValue for Value {
	fn from_value(value: &Value) -> Option<Self> {
		Some(value.clone())
	}

	fn value_type() -> ValueType {
		ValueType::Any
	}
}
