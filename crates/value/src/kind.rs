//! Runtime kind of a [`Value`](crate::Value).

use std::fmt;

/// The variant of a [`Value`](crate::Value) without its payload.
///
/// Used in type-mismatch messages such as `expected a list but got string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    DateTime,
    List,
    Map,
}

impl ValueKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Text => "string",
            Self::DateTime => "datetime",
            Self::List => "list",
            Self::Map => "dictionary",
        }
    }

    /// Returns true for the two numeric kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
