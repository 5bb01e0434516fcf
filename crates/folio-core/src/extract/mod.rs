//! Certificate field extraction module.

mod parser;
pub mod rules;

pub use parser::{CertificateParser, ExtractionResult};

use crate::error::ExtractionError;
use crate::models::document::Document;
use crate::models::fields::FieldMap;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for document field extractors.
pub trait FieldMapExtractor {
    /// Extract certificate fields from a parsed document.
    fn extract(&self, document: &Document) -> Result<FieldMap>;

    /// Parse JSON text and extract certificate fields from it.
    fn extract_from_json(&self, content: &str) -> crate::Result<FieldMap> {
        let document = Document::from_json(content)?;
        Ok(self.extract(&document)?)
    }
}
