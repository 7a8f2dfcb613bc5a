//! Macro for implementing string conversions on status enums
//!
//! Status enums cross the host boundary as lowercase strings (TOML config,
//! JSON payloads, log fields). This macro keeps the mapping in one place and
//! generates `ALL`, `as_str`, `Display` and a case-insensitive `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use uptimebar_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Health {
//!     Healthy,
//!     Degraded,
//! }
//!
//! impl_status_conversions!(Health {
//!     Healthy => "healthy",
//!     Degraded => "degraded",
//! });
//!
//! assert_eq!(Health::Degraded.as_str(), "degraded");
//! assert_eq!("HEALTHY".parse::<Health>().unwrap(), Health::Healthy);
//! assert_eq!(Health::ALL.len(), 2);
//! ```

/// Implements `ALL`, `as_str`, `Display` and `FromStr` for a fieldless enum.
///
/// Parsing ignores ASCII case and reports failures as
/// [`ParseStatusError`](crate::errors::ParseStatusError) carrying the enum
/// name.
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical lowercase name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::ParseStatusError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| $crate::errors::ParseStatusError {
                        kind: stringify!($enum_name),
                        value: s.to_string(),
                    })
            }
        }
    };
}
