//! Newtype wrappers around the opaque string identifiers assigned by the
//! remote drive.
//!
//! Using distinct types prevents accidentally passing a `FileId` where a
//! `FolderId` is expected. The remote side owns the format; the client
//! never parses or generates these values itself.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from a remote-assigned value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the raw identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string value.
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
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a remote folder.
    FolderId
);

define_id!(
    /// Identifier of a remote file.
    FileId
);
