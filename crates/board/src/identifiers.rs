//! Newtype names and identifiers for project board lookups.
//!
//! Names supplied on the command line and identifiers assigned by the remote
//! API are each wrapped in a distinct type, so a [`ProjectName`] can never be
//! handed where a [`ColumnName`] is expected, nor a [`ProjectId`] where a
//! [`ColumnId`] is expected.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_name {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new name, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if `candidate` is exactly this name.
            ///
            /// Comparison is byte-for-byte: `"To Do"` does not match `"to do"`.
            pub fn matches(&self, candidate: &str) -> bool {
                self.0 == candidate
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for u64-wrapped newtypes (remote-assigned integers).
// Generates: struct (Copy), new(), as_u64(), Display.
// ---------------------------------------------------------------------------
macro_rules! u64_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — remote-integer-backed
// ---------------------------------------------------------------------------

u64_id! {
    /// Identifies a project board. Needed to list the board's columns.
    ProjectId
}

u64_id! {
    /// Identifies a column within a project board.
    ///
    /// Displays as the bare integer, which is the program's entire output.
    ColumnId
}

// ---------------------------------------------------------------------------
// Names — String-backed (operator input)
// ---------------------------------------------------------------------------

string_name! {
    /// An organization (or user) login, e.g. `"cockroachdb"`.
    OrganizationName
}

string_name! {
    /// A repository name within an organization, without the owner prefix.
    RepositoryName
}

string_name! {
    /// The display name of a project board.
    ProjectName
}

string_name! {
    /// The display name of a column within a project board.
    ColumnName
}
