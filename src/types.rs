//! Shared record-kind enum, sentinel markers, and matching modes.

use serde::{Deserialize, Serialize};

/// Marker closing a data record.
pub const EOR: &str = "<eor>";
/// Marker closing a header record.
pub const EOH: &str = "<eoh>";
/// Tag-open character that starts every field and sentinel.
pub const TAG_OPEN: char = '<';
/// Minimum rendered width of the `CALL` field's data.
pub const CALL_PAD_WIDTH: usize = 8;

/// Which sentinel closed a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordKind {
    /// Closed by `<eoh>`.
    Header,
    /// Closed by `<eor>`.
    #[default]
    Data,
}

impl RecordKind {
    /// Sentinel text terminating a record of this kind.
    pub fn sentinel(self) -> &'static str {
        match self {
            RecordKind::Header => EOH,
            RecordKind::Data => EOR,
        }
    }
}

/// How a candidate line is tested against the sentinel markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelMatch {
    /// The line merely contains the marker somewhere.
    #[default]
    Substring,
    /// The line, trimmed of whitespace, is exactly the marker.
    ExactLine,
}

impl SentinelMatch {
    /// Returns true when `line` carries `sentinel` under this mode.
    pub fn matches(self, line: &str, sentinel: &str) -> bool {
        match self {
            SentinelMatch::Substring => line.contains(sentinel),
            SentinelMatch::ExactLine => line.trim() == sentinel,
        }
    }
}
