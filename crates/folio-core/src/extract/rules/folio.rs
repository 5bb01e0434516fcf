//! Folio status label detection.
//!
//! The status value is not on the label line; the parser takes it from the
//! following `LINE` block.

use super::patterns::FOLIO_STATUS_LABEL;

/// Whether the line contains the folio status label (case-insensitive).
pub fn is_folio_status_label(line: &str) -> bool {
    line.to_lowercase().contains(FOLIO_STATUS_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_label() {
        assert!(is_folio_status_label("ESTADO DEL FOLIO:"));
        assert!(is_folio_status_label("Fecha: 2020 Estado del Folio"));
        assert!(!is_folio_status_label("Estado: ACTIVO"));
        assert!(!is_folio_status_label("estado  del folio"));
    }
}
