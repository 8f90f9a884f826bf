use serde::{Deserialize, Serialize};

use crate::{field::FieldNameError, record::Record};

/// Records in encounter (or append) order.
///
/// Any number of headers is tolerated, in any position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a closed record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records, headers included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was parsed or pushed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access for in-place field edits.
    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Consumes the document.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Iterates records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Mutably iterates records in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    /// First header record, if any.
    pub fn header(&self) -> Option<&Record> {
        self.records.iter().find(|r| r.is_header())
    }

    /// Header records in order.
    pub fn headers(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.is_header())
    }

    /// Data records in order.
    pub fn data_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| !r.is_header())
    }

    /// Applies [`Record::remove_except`] to every data record.
    pub fn remove_except<S: AsRef<str>>(&mut self, allowed: &[S]) {
        for rec in self.records.iter_mut().filter(|r| !r.is_header()) {
            rec.remove_except(allowed);
        }
    }

    /// Sets `name` to `value` on every data record.
    pub fn set_all(&mut self, name: &str, value: &str) -> Result<(), FieldNameError> {
        for rec in self.records.iter_mut().filter(|r| !r.is_header()) {
            rec.set(name, value)?;
        }
        Ok(())
    }

    /// Keeps headers and the data records `keep` accepts.
    pub fn retain<P>(&mut self, mut keep: P)
    where
        P: FnMut(&Record) -> bool,
    {
        self.records.retain(|r| r.is_header() || keep(r));
    }
}

impl FromIterator<Record> for Document {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for Document {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
