use std::{io::BufRead, path::Path};

use tracing::{debug, info, trace, warn};

use crate::{
    config::ParseOptions,
    field::Field,
    persist::{PersistResult, reader},
    policy::{FieldValidator, Permissive},
    record::Record,
    types::{EOH, EOR, RecordKind},
};

use super::{
    document::Document,
    tokenizer::{candidate_lines, split_packed},
};

/// Parses a whole source with default options and the permissive validator.
pub fn parse<R: BufRead>(source: R) -> PersistResult<Document> {
    Parser::default().parse(source)
}

/// Opens and parses `path` with default options.
pub fn parse_path(path: impl AsRef<Path>) -> PersistResult<Document> {
    Parser::default().parse_path(path)
}

/// Parses text already in memory with default options.
pub fn parse_str(text: &str) -> Document {
    Parser::default().parse_str(text)
}

/// Document parser: options plus the validation policy.
pub struct Parser {
    options: ParseOptions,
    validator: Box<dyn FieldValidator>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl Parser {
    /// Parser using `options` and the permissive validator.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            validator: Box::new(Permissive),
        }
    }

    /// Swaps in a different validation policy.
    pub fn with_validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Active options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Reads `source` to the end and returns its closed records.
    ///
    /// Only I/O and decoding failures are errors; malformed lines are skipped.
    pub fn parse<R: BufRead>(&self, source: R) -> PersistResult<Document> {
        let mut acc = Accumulator::new(self);
        for line in reader::lines(source) {
            acc.feed_physical(&line?);
        }
        Ok(acc.finish())
    }

    /// Opens `path` and parses it.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> PersistResult<Document> {
        let source = reader::open(path)?;
        self.parse(source)
    }

    /// Parses text that is already in memory; cannot fail.
    pub fn parse_str(&self, text: &str) -> Document {
        let mut acc = Accumulator::new(self);
        for candidate in candidate_lines(text) {
            acc.feed(candidate);
        }
        acc.finish()
    }
}

/// The single accumulating state: an open record and the closed ones.
struct Accumulator<'p> {
    parser: &'p Parser,
    current: Record,
    doc: Document,
    skipped: usize,
}

impl<'p> Accumulator<'p> {
    fn new(parser: &'p Parser) -> Self {
        Self {
            parser,
            current: Record::new(),
            doc: Document::new(),
            skipped: 0,
        }
    }

    fn feed_physical(&mut self, line: &str) {
        for candidate in split_packed(line) {
            self.feed(candidate);
        }
    }

    // Field parsing goes first so a well-formed field whose data mentions a
    // sentinel is never mistaken for one.
    fn feed(&mut self, line: &str) {
        let sentinels = self.parser.options.sentinel_match;

        if let Some(field) = Field::parse(line) {
            trace!(name = field.name(), data = field.data(), "parsed field");
            if !self.parser.validator.validate(&field) {
                debug!(line = line.trim(), "field failed validation");
                if self.parser.options.drop_invalid_fields {
                    return;
                }
            }
            self.current.push(field);
        } else if sentinels.matches(line, EOR) {
            self.close(RecordKind::Data);
        } else if sentinels.matches(line, EOH) {
            self.close(RecordKind::Header);
        } else {
            trace!(line = line.trim(), "skipping line");
            self.skipped += 1;
        }
    }

    fn close(&mut self, kind: RecordKind) {
        debug!(?kind, fields = self.current.len(), "closing record");
        let mut rec = std::mem::take(&mut self.current);
        rec.set_kind(kind);
        self.doc.push(rec);
    }

    fn finish(self) -> Document {
        if !self.current.is_empty() {
            warn!(
                fields = self.current.len(),
                "input ended inside an unterminated record; discarding it"
            );
        }
        info!(
            records = self.doc.len(),
            skipped_lines = self.skipped,
            "parsed document"
        );
        self.doc
    }
}
