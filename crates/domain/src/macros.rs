//! Macro for wire-name conversions on protocol enums
//!
//! The remote service spells its enumerations in upper snake case
//! (`REPLACE_ALL`, `EMAIL_ADDRESS`, `UTF_8`). This macro gives an enum a
//! single table of wire names and derives `Display`, `FromStr` and the serde
//! impls from it.
//!
//! # Example
//!
//! ```rust
//! use responsys_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Email,
//!     Sms,
//! }
//!
//! impl_wire_name_conversions!(Channel {
//!     Email => "EMAIL",
//!     Sms => "SMS",
//! });
//!
//! assert_eq!(Channel::Sms.to_string(), "SMS");
//! assert_eq!("email".parse::<Channel>().unwrap(), Channel::Email);
//! ```

/// Implements `as_str`, `Display`, `FromStr`, `Serialize` and `Deserialize`
/// for a field-less enum from a variant => wire-name table.
///
/// Parsing is case-insensitive and ignores surrounding whitespace; the wire
/// names in the table must be upper case.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire spelling of this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }

        impl ::serde::Serialize for $enum_name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestColumn {
        Riid,
        EmailAddress,
    }

    impl_wire_name_conversions!(TestColumn {
        Riid => "RIID",
        EmailAddress => "EMAIL_ADDRESS",
    });

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(TestColumn::Riid.to_string(), "RIID");
        assert_eq!(TestColumn::EmailAddress.to_string(), "EMAIL_ADDRESS");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestColumn::from_str("riid").unwrap(), TestColumn::Riid);
        assert_eq!(TestColumn::from_str(" Email_Address ").unwrap(), TestColumn::EmailAddress);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestColumn::from_str("MOBILE");
        assert!(result.unwrap_err().contains("Invalid TestColumn: MOBILE"));
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_value(TestColumn::EmailAddress).unwrap();
        assert_eq!(json, serde_json::json!("EMAIL_ADDRESS"));

        let parsed: TestColumn = serde_json::from_value(serde_json::json!("riid")).unwrap();
        assert_eq!(parsed, TestColumn::Riid);
    }

    mod with_result_alias {
        use std::str::FromStr;

        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Encoding {
            Utf8,
            Latin1,
        }

        impl_wire_name_conversions!(Encoding {
            Utf8 => "UTF_8",
            Latin1 => "ISO_8859_1",
        });

        #[test]
        fn test_expands_next_to_crate_result_alias() {
            assert_eq!(Encoding::from_str("iso_8859_1").unwrap(), Encoding::Latin1);
            assert_eq!(serde_json::to_value(Encoding::Utf8).unwrap(), serde_json::json!("UTF_8"));

            let parsed: Result<Encoding> = Ok(Encoding::Utf8);
            assert_eq!(parsed, Ok(Encoding::Utf8));
        }
    }
}
