//! Lenient reader and writer for ADIF amateur-radio contact logs.
//!
//! Input may hold one field per line or many fields packed onto a line.
//! Malformed lines are skipped rather than rejected; only I/O failures are
//! errors.
//!
//! # Examples
//!
//! Parse, edit, and write back with [`core::parser::parse`] and
//! [`persist::writer::write`]:
//! ```
//! use adiflog::{core::parser::parse, persist::writer::write};
//!
//! let input = "log export <eoh>\n<CALL:5>K1ABC<BAND:3>20m<eor>\n";
//! let mut doc = parse(input.as_bytes()).expect("parse");
//! assert_eq!(doc.len(), 2);
//!
//! let qso = &mut doc.records_mut()[1];
//! assert_eq!(qso.get("call"), Some("K1ABC"));
//! qso.set("mode", "CW").expect("valid name");
//!
//! let mut out = Vec::new();
//! let written = write(&mut out, &doc).expect("write");
//! assert_eq!(written, 2);
//! ```
//!
//! Stricter parsing with a substituted validator and exact sentinel lines:
//! ```
//! use adiflog::{
//!     config::ParseOptions,
//!     core::parser::Parser,
//!     policy::DeclaredLength,
//!     types::SentinelMatch,
//! };
//!
//! let parser = Parser::new(ParseOptions {
//!     sentinel_match: SentinelMatch::ExactLine,
//!     drop_invalid_fields: true,
//! })
//! .with_validator(DeclaredLength);
//!
//! let doc = parser.parse_str("<CALL:5>K1ABC\n<BAND:9>20m\n<eor>\n");
//! assert_eq!(doc.records()[0].len(), 1);
//! ```
#![deny(missing_docs)]

/// Parser options.
pub mod config;
/// Tokenizer, parser state machine, and document model.
pub mod core;
/// Field tokens.
pub mod field;
/// Stream errors, reading, and writing.
pub mod persist;
/// Pluggable field validation.
pub mod policy;
/// Record accumulator.
pub mod record;
/// Shared enums and sentinel constants.
pub mod types;
