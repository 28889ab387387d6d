//! Newtype identifiers for regions, channels and languages.
//!
//! Keeping these distinct stops a channel id from being passed where a
//! region id is expected, which would silently resolve to nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Short market identifier, e.g. `nl`.
    RegionId
);
define_id!(
    /// Opaque upstream channel selecting catalog and pricing data.
    ChannelId
);
define_id!(
    /// Short internal language identifier, e.g. `nl`.
    LanguageId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = RegionId::new("nl");
        assert_eq!(id.as_str(), "nl");
        assert_eq!(id, "nl");
    }

    #[test]
    fn test_id_display() {
        let id = ChannelId::new("channel-pln");
        assert_eq!(format!("{}", id), "channel-pln");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = LanguageId::from("de");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""de""#);

        let back: LanguageId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
