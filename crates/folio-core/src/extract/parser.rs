//! Line-scanning parser that builds a [`FieldMap`] from a document.

use std::time::Instant;

use tracing::{debug, trace};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::document::{BlockType, Document};
use crate::models::fields::FieldMap;
use crate::normalize::normalize;

use super::rules::{
    is_folio_status_label, FieldExtractor, LocationExtractor, PrintDateExtractor,
    RegistrationExtractor,
};
use super::{FieldMapExtractor, Result};

/// Result of certificate extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub fields: FieldMap,
    /// Number of `LINE` blocks scanned.
    pub lines_scanned: usize,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based certificate parser.
///
/// Fields take the last match in document order. The folio status is the
/// trimmed raw text of the `LINE` block right after a line containing
/// "estado del folio".
#[derive(Debug, Clone, Default)]
pub struct CertificateParser {
    /// Fail on blocks without a `BlockType` instead of skipping them.
    strict_blocks: bool,
}

impl CertificateParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_strict_blocks(config.strict_blocks)
    }

    /// Set strict block handling.
    pub fn with_strict_blocks(mut self, strict: bool) -> Self {
        self.strict_blocks = strict;
        self
    }

    /// Parse a document, returning fields plus scan details.
    pub fn parse(&self, document: &Document) -> Result<ExtractionResult> {
        let start = Instant::now();

        let registration = RegistrationExtractor::new();
        let print_date = PrintDateExtractor::new();
        let location = LocationExtractor::new();

        let mut fields = FieldMap::default();
        let mut warnings = Vec::new();
        let mut lines_scanned = 0;
        let mut awaiting_folio_status = false;

        let blocks = &document.blocks;

        for (i, block) in blocks.iter().enumerate() {
            let Some(block_type) = block.block_type else {
                if self.strict_blocks {
                    return Err(ExtractionError::MalformedBlock { index: i });
                }
                warnings.push(format!("block {} has no BlockType, skipped", i));
                continue;
            };

            if block_type != BlockType::Line {
                continue;
            }
            lines_scanned += 1;

            let text = normalize(block.text());
            trace!(index = i, line = %text, "scanning line");

            if let Some(value) = registration.extract(&text) {
                debug!(index = i, value = %value, "registration number");
                fields.registration_number = Some(value);
            }

            if let Some(value) = print_date.extract(&text) {
                debug!(index = i, value = %value, "print date");
                fields.print_date = Some(value);
            }

            if let Some(loc) = location.extract(&text) {
                debug!(
                    index = i,
                    department = %loc.department,
                    municipality = %loc.municipality,
                    vereda = %loc.rural_subdivision,
                    "location"
                );
                fields.department = Some(loc.department);
                fields.municipality = Some(loc.municipality);
                fields.rural_subdivision = Some(loc.rural_subdivision);
            }

            if is_folio_status_label(&text) {
                awaiting_folio_status = true;
            }

            // Re-checked on every LINE while the label is pending, so a
            // non-LINE block after the label defers capture to a later line.
            if awaiting_folio_status {
                if let Some(next) = blocks.get(i + 1).filter(|b| b.is_line()) {
                    let value = next.text().trim().to_string();
                    debug!(index = i + 1, value = %value, "folio status");
                    fields.folio_status = Some(value);
                    awaiting_folio_status = false;
                }
            }
        }

        if awaiting_folio_status {
            warnings.push("folio status label found without a following line".to_string());
        }

        Ok(ExtractionResult {
            fields,
            lines_scanned,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl FieldMapExtractor for CertificateParser {
    fn extract(&self, document: &Document) -> Result<FieldMap> {
        self.parse(document).map(|r| r.fields)
    }
}
