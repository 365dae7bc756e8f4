//! Key declaration macros.

/// Declares a fieldless key enum together with its [`Key`](crate::Key),
/// [`KeyFamily`](crate::KeyFamily) and `Display` impls.
///
/// Each variant names its [`ValueType`](crate::ValueType) and initial value.
/// Wrapping the type in `Option< >` makes the key nullable. Keys are ordered
/// by declaration and display as their variant name.
///
/// # Example
///
/// ```ignore
/// keyed_record::keys! {
///     /// Properties of a contact.
///     pub enum Contact {
///         Name: Text = "",
///         Age: Int = 0,
///         Email: Option<Text> = None,
///     }
/// }
/// ```
#[macro_export]
macro_rules! keys {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident : $kind:tt $(< $inner:ident >)? = $initial:expr
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $crate::Key for $name {
			fn value_type(&self) -> $crate::ValueType {
				match *self {
					$(Self::$variant => $crate::__key_type!($kind $($inner)?),)+
				}
			}

			fn nullable(&self) -> bool {
				match *self {
					$(Self::$variant => $crate::__key_nullable!($kind $($inner)?),)+
				}
			}

			fn initial(&self) -> ::core::option::Option<$crate::Value> {
				match *self {
					$(Self::$variant => $crate::IntoValue::into_value($initial),)+
				}
			}
		}

		impl $crate::KeyFamily for $name {
			fn all() -> &'static [Self] {
				&[$(Self::$variant),+]
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(match *self {
					$(Self::$variant => stringify!($variant),)+
				})
			}
		}
	};
}

/// Maps a `keys!` type declaration to its value type.
#[doc(hidden)]
#[macro_export]
macro_rules! __key_type {
	(Option $inner:ident) => {
		$crate::ValueType::$inner
	};
	($ty:ident) => {
		$crate::ValueType::$ty
	};
}

/// Maps a `keys!` type declaration to its nullability.
#[doc(hidden)]
#[macro_export]
macro_rules! __key_nullable {
	(Option $inner:ident) => {
		true
	};
	($ty:ident) => {
		false
	};
}
