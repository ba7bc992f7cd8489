//! # Composite Literal Parser and Composer
//!
//! This crate reads and writes the textual form of [Postgres composite
//! values](https://www.postgresql.org/docs/current/rowtypes.html#ROWTYPES-IO-SYNTAX):
//! a parenthesized, comma-separated list of fields such as
//! `(52.52,13.405)` or `(1,"Hello, ""world""",)`.
//!
//! The codec works on raw text only. Decoded fields are returned as strings
//! and callers reinterpret them; nested composite values are not unpacked.
//!
//! The primary functions provided are:
//!
//! - `parse_composite_fields`: Parses a composite literal into its raw
//!   fields.
//! - `parse_composite_fields_partial`: Parses a composite literal at the start
//!   of a string and reports how many bytes it used.
//! - `to_composite_string`: Composes a composite literal from a sequence of
//!   field values.
//! - `make_sql_placeholder`: Builds positional SQL parameters (`$1,$2,...`).
//!
//! ## Field Syntax
//!
//! | Field form        | Literal            | Decoded     |
//! | ----------------- | ------------------ | ----------- |
//! | Plain             | `(abc)`            | `abc`       |
//! | Empty             | `()`               | (empty)     |
//! | Backslash escapes | `(a\,b\(c\))`      | `a,b(c)`    |
//! | Quoted            | `("a,b")`          | `a,b`       |
//! | Doubled quote     | `("say ""hi""")`   | `say "hi"`  |
//!
//! The composer always uses backslash escapes and never quotes, so any
//! sequence of fields survives a compose/parse round trip:
//!
//! ```rust
//! # use composite_literal::{ parse_composite_fields, to_composite_string };
//! let fields = ["a,b", "c(d)", "e\"f", r"g\h"];
//! let literal = to_composite_string(fields);
//! assert_eq!(literal, r#"(a\,b,c\(d\),e\"f,g\\h)"#);
//! assert_eq!(parse_composite_fields(&literal).unwrap(), fields);
//! ```
//!
//! ## Typed Values
//!
//! With the default `adapters` feature, the [`Composite`] trait maps typed
//! values to and from their composite form. [`GeoPoint`] and [`PhoneNumber`]
//! are provided.

mod error;
pub use error::{ Error as ParseError, Result as ParseResult };
use error::{ Error, Result };

mod token;
use token::Token;

mod parse;
pub use parse::{ parse_composite_fields, parse_composite_fields_partial };

mod compose;
pub use compose::{ escape_field, to_composite_string, CompositeField, Displayed };

mod placeholder;
pub use placeholder::{ make_placeholder, make_sql_placeholder };

#[cfg(feature = "adapters")]
mod adapter;
#[cfg(feature = "adapters")]
pub use adapter::{
    bytes_field,
    expect_fields,
    from_composite,
    parse_field,
    to_composite,
    Composite,
    GeoPoint,
    PhoneNumber,
    Error as AdapterError,
    Result as AdapterResult,
};
