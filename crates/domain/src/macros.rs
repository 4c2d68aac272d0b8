//! Macro for implementing Display and FromStr for label enums
//!
//! Auth events and navigation tabs travel as plain strings (backend
//! notifications, frontend command arguments). This macro gives them one
//! Display/FromStr pair with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use profilemap_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Panel {
//!     List,
//!     Map,
//! }
//!
//! impl_domain_label_conversions!(Panel {
//!     List => "list",
//!     Map => "map",
//! });
//!
//! assert_eq!("MAP".parse::<Panel>().unwrap(), Panel::Map);
//! ```

/// Implements Display and FromStr traits for label enums
///
/// Labels must be written in lowercase; parsing lowercases its input before
/// matching, so `"SIGNED_IN"` and `"signed_in"` are the same label.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
