//! Identifier newtypes
//!
//! Arguments, attacks, agents and frameworks are all addressed by
//! caller-chosen strings (`"A1"`, `"att-b2"`, `"collapse-debate"`). Each gets
//! its own type so an attack id can never be passed where an argument id is
//! expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create identifier from any string-like value
            #[inline]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier text
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of an argument, unique within its framework
    ArgumentId
);

string_id!(
    /// Identifier of an attack, unique within its framework
    AttackId
);

string_id!(
    /// Identifier of the agent proposing an argument
    AgentId
);

string_id!(
    /// Key under which a framework (one debate topic) is registered
    FrameworkKey
);
