//! Built-in field factories
//!
//! Each factory returns a required [`TypedField`](crate::schema::TypedField)
//! whose builder methods configure the check. All of them share
//! `optional()` and `default(value)`.
//!
//! - **Scalars**: [`string`], [`integer`], [`float`], [`date`]
//! - **Composites**: [`list`], [`dict`]
//! - **User units**: [`custom`]
//!
//! # Examples
//!
//! ```
//! use finicky_validator::prelude::*;
//!
//! let address = Schema::builder()
//!     .field("city", string().min_len(1))
//!     .build()
//!     .unwrap();
//!
//! let schema = Schema::builder()
//!     .field("name", string().max_len(64))
//!     .field("stars", integer().min(0).default(0))
//!     .field("price", float().min(0.01))
//!     .field("released", date().optional())
//!     .field("tags", list(string()).all(false))
//!     .field("address", dict(address))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.len(), 6);
//! ```

mod custom;
mod date;
mod dict;
mod list;
mod number;
mod text;

pub use custom::{Custom, custom};
pub use date::{DEFAULT_DATE_FORMAT, DateRule, check_format, date, parse_datetime};
pub use dict::dict;
pub use list::{ListRule, list};
pub use number::{DEFAULT_ROUND_TO, FloatRule, IntegerRule, float, integer, round};
pub use text::{TextRule, string};
