//! Field token: one `<NAME:LENGTH[:TYPE]>DATA` unit.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CALL_PAD_WIDTH;

static FIELD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<([A-Za-z0-9_]+):([0-9]+)(?::([A-Za-z0-9_]+))?>(.*)$").unwrap()
});

static FIELD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Rejected field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field name {0:?}: expected one or more of [A-Za-z0-9_]")]
pub struct FieldNameError(pub String);

/// One tagged field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    declared_length: usize,
    type_tag: Option<String>,
    data: String,
    comment: Option<String>,
}

impl Field {
    /// Builds a field whose declared length is the character count of `data`.
    ///
    /// The name is stored as given; [`crate::record::Record::set`] is what
    /// uppercases names.
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Result<Self, FieldNameError> {
        let name = name.into();
        if !FIELD_NAME.is_match(&name) {
            return Err(FieldNameError(name));
        }
        let data = data.into();
        Ok(Self {
            name,
            declared_length: data.chars().count(),
            type_tag: None,
            data,
            comment: None,
        })
    }

    /// Attaches a data-type hint.
    pub fn with_type_tag(mut self, type_tag: Option<String>) -> Self {
        self.type_tag = type_tag;
        self
    }

    /// Attaches trailing free text.
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Parses one candidate line.
    ///
    /// Returns `None` for anything that is not a field line: sentinels,
    /// blank lines, prose. The caller decides what those mean.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = FIELD_LINE.captures(line)?;
        // The length is advisory; an oversized one saturates.
        let declared_length = caps[2].parse().unwrap_or(usize::MAX);
        Some(Self {
            name: caps[1].to_string(),
            declared_length,
            type_tag: caps.get(3).map(|m| m.as_str().to_string()),
            data: caps[4].trim().to_string(),
            comment: None,
        })
    }

    /// Field name as parsed or set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length the producer declared, which may disagree with [`Field::data`].
    pub fn declared_length(&self) -> usize {
        self.declared_length
    }

    /// Optional data-type hint.
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Trimmed payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Optional trailing annotation.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// True when the declared length equals the payload's character count.
    pub fn length_matches(&self) -> bool {
        self.declared_length == self.data.chars().count()
    }

    /// Renders `<NAME:LENGTH[:TYPE]>DATA`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub(crate) fn uppercase_name(&mut self) {
        self.name.make_ascii_uppercase();
    }

    pub(crate) fn overwrite(&mut self, data: String, type_tag: Option<String>, comment: Option<String>) {
        self.uppercase_name();
        self.declared_length = data.chars().count();
        self.data = data;
        self.type_tag = type_tag;
        self.comment = comment;
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}:{}",
            self.name.to_ascii_uppercase(),
            self.data.chars().count()
        )?;
        if let Some(t) = &self.type_tag {
            write!(f, ":{t}")?;
        }
        // Padding is cosmetic: the length above is always the unpadded one.
        if self.is_named("CALL") {
            write!(f, ">{:<width$}", self.data, width = CALL_PAD_WIDTH)
        } else {
            write!(f, ">{}", self.data)
        }
    }
}
