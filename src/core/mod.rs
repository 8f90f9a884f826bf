//! Parsing engine: line normalization, record state machine, document model.

/// Ordered record collection.
pub mod document;
/// Record-assembly state machine.
pub mod parser;
/// Packed-line normalization.
pub mod tokenizer;
