//! Core library for registry certificate field extraction.
//!
//! This crate provides:
//! - Document-analysis JSON models (block-based text-line records)
//! - Text normalization (mis-decoded UTF-8 repair, accent stripping)
//! - Field extraction (registration number, print date, location, folio status)
//! - Configuration structures shared with the CLI

pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;

pub use error::{ExtractionError, FolioError, Result};
pub use extract::{CertificateParser, FieldMapExtractor};
pub use models::document::{Block, BlockType, Document};
pub use models::fields::FieldMap;
pub use normalize::normalize;
