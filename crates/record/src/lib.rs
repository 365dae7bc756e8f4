//! Immutable keyed property records and their validating builders.
//!
//! A record's properties are identified by a closed set of typed key
//! descriptors instead of fixed fields. Each [`Key`] declares the
//! [`ValueType`] of its values, whether it is nullable and its initial value.
//!
//! - [`Record`] is total over its [`KeySet`] and never changes after
//!   construction.
//! - [`Builder`] (and any other [`Mutable`]) is the mutable counterpart; it
//!   supports single-key sets, merges and resets, and snapshots into a record
//!   with [`Builder::build`].
//! - Both funnel every value through [`copy`], so they accept exactly the
//!   same values.
//!
//! # Example
//!
//! ```ignore
//! use keyed_record::{Builder, Mutable, keys};
//!
//! keys! {
//!     pub enum Contact {
//!         Name: Text = "",
//!         Age: Int = 0,
//!         Email: Option<Text> = None,
//!     }
//! }
//!
//! let mut builder = Builder::for_family()?;
//! builder.set(Contact::Name, "Ada")?.set(Contact::Age, 36)?;
//! let record = builder.build();
//! assert_eq!(record.get(Contact::Email)?, None);
//! ```

/// Mutable builders and the builder supertype.
pub mod builder;
/// The validating copy primitive and copy policies.
pub mod copy;
/// Error types.
pub mod error;
/// Key descriptors and key sets.
pub mod key;
mod macros;
/// The immutable record.
pub mod record;
/// Text rendering of values and entries.
pub mod render;
/// Fluent source entry assembly.
pub mod template;
/// Typed key handles.
pub mod typed_key;
/// Property values and value types.
pub mod value;

#[cfg(test)]
mod test_keys;

pub use builder::{Backing, Builder, Mutable};
pub use copy::{Entries, MissingPolicy, OverheadPolicy, cast, copy, overhead};
pub use error::{RecordError, Result};
pub use key::{Key, KeyFamily, KeySet};
pub use record::Record;
pub use template::Template;
pub use typed_key::TypedKey;
pub use value::{FromValue, IntoValue, Value, ValueType};
