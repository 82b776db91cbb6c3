//! # finicky-value
//!
//! The dynamic value model that flows through finicky validation.
//!
//! Untrusted input arrives loosely typed: JSON numbers that should be
//! integers, strings that should be dates, objects nested inside lists.
//! [`Value`] represents any such datum, and [`Record`] is the ordered
//! field-name → value mapping a schema is validated against.
//!
//! ```
//! use finicky_value::{Value, ValueKind, record};
//!
//! let repo = record! {
//!     "name" => "finicky",
//!     "stars" => "2000",
//! };
//! assert_eq!(repo["stars"].kind(), ValueKind::Text);
//!
//! let json = serde_json::json!({"tags": ["a", "b"]});
//! let value = Value::from(json);
//! assert_eq!(value.kind(), ValueKind::Map);
//! ```

mod json;
mod kind;
mod macros;
mod value;

pub use json::record_to_json;
pub use kind::ValueKind;
pub use value::{Record, Value};

/// Format used when a datetime is rendered as text.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
