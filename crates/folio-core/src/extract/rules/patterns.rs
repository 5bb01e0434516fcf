//! Label-anchored patterns for registry certificate lines.
//!
//! All patterns run against normalized text (see [`crate::normalize`]), so
//! labels are written without accents.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Registration number: "Nro Matricula: 50C-123456"
    pub static ref REGISTRATION_NUMBER: Regex = Regex::new(
        r"(?i)\bnro\s+matricula[:\s]*(\S+)"
    ).unwrap();

    // Print date: "impreso el 12 de enero de 2023" (matched on lowercased text)
    // ASCII digits only, so every match parses.
    pub static ref PRINT_DATE: Regex = Regex::new(
        r"(?i)impreso el\s([0-9]{1,2})\sde\s(\w+)\sde\s([0-9]{4})"
    ).unwrap();

    // Location: "Circulo Registral: 50C Depto: X Municipio: Y Vereda: Z"
    // Each value runs greedily up to the next label, the last one to end of line.
    pub static ref LOCATION: Regex = Regex::new(concat!(
        r"(?i)circulo\sregistral:\s*[\w\s-]+.*?",
        r"depto:\s*(\S+(?:\s+\S+)*)",
        r".*?",
        r"municipio:\s*(\S+(?:\s+\S+)*)",
        r".*?",
        r"vereda:\s*(\S+(?:\s+\S+)*)",
    )).unwrap();
}

/// Label that precedes the folio status line.
pub const FOLIO_STATUS_LABEL: &str = "estado del folio";
