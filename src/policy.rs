//! Field validation strategies consulted by the parser.

use crate::field::Field;

/// Decides whether a parsed field is acceptable.
///
/// The parser only consults the verdict; what happens to a rejected
/// field is governed by [`crate::config::ParseOptions::drop_invalid_fields`].
pub trait FieldValidator: Send + Sync {
    /// Returns true when `field` passes.
    fn validate(&self, field: &Field) -> bool;
}

/// Accepts everything. The default.
///
/// Producers routinely append text after the payload, so declared lengths
/// are not trusted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl FieldValidator for Permissive {
    fn validate(&self, _field: &Field) -> bool {
        true
    }
}

/// Requires the declared length to equal the payload's character count.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredLength;

impl FieldValidator for DeclaredLength {
    fn validate(&self, field: &Field) -> bool {
        field.length_matches()
    }
}

impl<F> FieldValidator for F
where
    F: Fn(&Field) -> bool + Send + Sync,
{
    fn validate(&self, field: &Field) -> bool {
        self(field)
    }
}
