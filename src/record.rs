//! Record accumulator: an ordered run of fields closed by a sentinel.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{
    field::{Field, FieldNameError},
    types::RecordKind,
};

/// Ordered fields plus the kind of sentinel that closed them.
///
/// Lookups are case-insensitive and first-match: when malformed input
/// leaves duplicate names behind, only the first one is visible to
/// [`Record::get`] and touched by [`Record::set`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<Field>,
    kind: RecordKind,
}

impl Record {
    /// Empty data record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty record of `kind`.
    pub fn with_kind(kind: RecordKind) -> Self {
        Self {
            fields: Vec::new(),
            kind,
        }
    }

    /// Header or data.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Re-tags the record.
    pub fn set_kind(&mut self, kind: RecordKind) {
        self.kind = kind;
    }

    /// Shorthand for `kind() == RecordKind::Header`.
    pub fn is_header(&self) -> bool {
        self.kind == RecordKind::Header
    }

    /// Appends `field` after every existing one.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields were accumulated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Data of the first field called `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_field(name).map(Field::data)
    }

    /// First field called `name`, ignoring case.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_named(name))
    }

    /// Overwrites the first field called `name`, or appends a new one.
    ///
    /// The stored name ends up uppercased either way.
    pub fn set(&mut self, name: &str, data: impl Into<String>) -> Result<(), FieldNameError> {
        self.set_with(name, data, None, None)
    }

    /// [`Record::set`] carrying a type tag and comment.
    ///
    /// An overwritten field takes the given tag and comment, replacing
    /// whatever it had.
    pub fn set_with(
        &mut self,
        name: &str,
        data: impl Into<String>,
        type_tag: Option<String>,
        comment: Option<String>,
    ) -> Result<(), FieldNameError> {
        let data = data.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.is_named(name)) {
            existing.overwrite(data, type_tag, comment);
            return Ok(());
        }

        let field = Field::new(name.to_ascii_uppercase(), data)?
            .with_type_tag(type_tag)
            .with_comment(comment);
        self.fields.push(field);
        Ok(())
    }

    /// Removes the first field called `name` and returns it.
    pub fn remove(&mut self, name: &str) -> Option<Field> {
        let pos = self.fields.iter().position(|f| f.is_named(name))?;
        Some(self.fields.remove(pos))
    }

    /// Drops every field whose name is not in `allowed`, then uppercases
    /// the names of the survivors. Relative order is kept.
    pub fn remove_except<I, S>(&mut self, allowed: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: HashSet<String> = allowed
            .into_iter()
            .map(|n| n.as_ref().to_ascii_uppercase())
            .collect();

        self.fields
            .retain(|f| allowed.contains(&f.name().to_ascii_uppercase()));
        for f in &mut self.fields {
            f.uppercase_name();
        }
    }

    /// Renders every field followed by a space, then the closing sentinel.
    ///
    /// Headers get two trailing newlines after `<eoh>`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for f in &self.fields {
            out.push_str(&f.to_text());
            out.push(' ');
        }
        out.push_str(self.kind.sentinel());
        if self.is_header() {
            out.push_str("\n\n");
        }
        out
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
