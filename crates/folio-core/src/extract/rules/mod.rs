//! Rule-based field extractors for registry certificate lines.

pub mod dates;
pub mod folio;
pub mod location;
pub mod patterns;
pub mod registration;

pub use dates::{extract_print_date, spanish_month_to_number, PrintDateExtractor};
pub use folio::is_folio_status_label;
pub use location::{extract_location, Location, LocationExtractor};
pub use patterns::*;
pub use registration::{extract_registration_number, RegistrationExtractor};

/// Trait for single-line field extractors.
///
/// Input is one normalized text line; `None` means the line does not carry
/// the field.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from a line.
    fn extract(&self, line: &str) -> Option<Self::Output>;
}
