//! Macro for implementing Display and FromStr for domain enums
//!
//! Workout documents carry several small string enums (status, muscle group)
//! that need a stable textual form for logs, config and the CLI driver. The
//! macro provides both conversions from a single mapping.
//!
//! # Example
//!
//! ```rust
//! use sparta_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum StorageBackend {
//!     File,
//!     Sqlite,
//! }
//!
//! impl_domain_status_conversions!(StorageBackend {
//!     File => "file",
//!     Sqlite => "sqlite",
//! });
//!
//! assert_eq!(StorageBackend::Sqlite.to_string(), "sqlite");
//! assert_eq!("FILE".parse::<StorageBackend>().unwrap(), StorageBackend::File);
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// - Display writes the mapped string
/// - FromStr parses case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_domain_status_conversions {
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

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        Warmup,
        Working,
        Cooldown,
    }

    impl_domain_status_conversions!(Phase {
        Warmup => "warmup",
        Working => "working",
        Cooldown => "cooldown",
    });

    #[test]
    fn display_uses_mapping() {
        assert_eq!(Phase::Warmup.to_string(), "warmup");
        assert_eq!(Phase::Cooldown.to_string(), "cooldown");
    }

    #[test]
    fn fromstr_is_case_insensitive() {
        assert_eq!(Phase::from_str("WORKING").unwrap(), Phase::Working);
        assert_eq!(Phase::from_str("WarmUp").unwrap(), Phase::Warmup);
    }

    #[test]
    fn fromstr_reports_enum_name() {
        let err = Phase::from_str("stretching").unwrap_err();
        assert!(err.contains("Invalid Phase: stretching"));
        assert!(Phase::from_str("").is_err());
    }
}
