//! Deterministic text rendering of values and entries.
//!
//! Text is quoted with `\` and `"` escaped, absent values render as `null`,
//! floats always carry a fractional part and dates use RFC 3339 in UTC.

use core::fmt::{self, Write};

use chrono::SecondsFormat;

use crate::copy::Entries;
use crate::key::Key;
use crate::value::Value;


const NULL: &str = "null";

/// Writes a possibly absent value.
pub fn write_value<W: Write>(out: &mut W, value: Option<&Value>) -> fmt::Result {
	match value {
		None => out.write_str(NULL),
		Some(Value::Bool(v)) => write!(out, "{v}"),
		Some(Value::Int(v)) => write!(out, "{v}"),
		Some(Value::Float(v)) => write!(out, "{v:?}"),
		Some(Value::Text(v)) => write_text(out, v),
		Some(Value::Date(v)) => out.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
	}
}

fn write_text<W: Write>(out: &mut W, text: &str) -> fmt::Result {
	out.write_char('"')?;
	for ch in text.chars() {
		match ch {
			'\\' => out.write_str("\\\\")?,
			'"' => out.write_str("\\\"")?,
			ch => out.write_char(ch)?,
		}
	}
	out.write_char('"')
}

/// Writes entries as `{KEY = value, ...}` in key order.
pub fn write_entries<W: Write, K: Key>(out: &mut W, entries: &Entries<K>) -> fmt::Result {
	out.write_char('{')?;
	for (index, (key, value)) in entries.iter().enumerate() {
		if index > 0 {
			out.write_str(", ")?;
		}
		write!(out, "{key} = ")?;
		write_value(out, value.as_ref())?;
	}
	out.write_char('}')
}

/// Renders a possibly absent value to a string.
pub fn value_to_string(value: Option<&Value>) -> String {
	let mut out = String::new();
	// Writing into a String cannot fail.
	let _ = write_value(&mut out, value);
	out
}

/// Renders keys as `[A, B, C]`.
pub fn key_list<K: fmt::Display>(keys: impl IntoIterator<Item = K>) -> String {
	let mut out = String::from("[");
	for (index, key) in keys.into_iter().enumerate() {
		if index > 0 {
			out.push_str(", ");
		}
		let _ = write!(out, "{key}");
	}
	out.push(']');
	out
}
