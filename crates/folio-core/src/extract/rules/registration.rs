//! Registration number (matrícula inmobiliaria) extraction.

use super::patterns::REGISTRATION_NUMBER;
use super::FieldExtractor;

/// Registration number extractor.
pub struct RegistrationExtractor;

impl RegistrationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegistrationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RegistrationExtractor {
    type Output = String;

    fn extract(&self, line: &str) -> Option<Self::Output> {
        REGISTRATION_NUMBER
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Extract the registration number from a line.
pub fn extract_registration_number(line: &str) -> Option<String> {
    RegistrationExtractor::new().extract(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_labeled() {
        assert_eq!(
            extract_registration_number("Nro Matricula: 50C-123456"),
            Some("50C-123456".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            extract_registration_number("CERTIFICADO NRO MATRICULA:370-98765 Pagina 1"),
            Some("370-98765".to_string())
        );
    }

    #[test]
    fn test_without_colon() {
        assert_eq!(
            extract_registration_number("nro   matricula 001-2"),
            Some("001-2".to_string())
        );
    }

    #[test]
    fn test_takes_single_token() {
        assert_eq!(
            extract_registration_number("Nro Matricula: 50N-20 Impreso el 1 de mayo de 2020"),
            Some("50N-20".to_string())
        );
    }

    #[test]
    fn test_no_value() {
        assert_eq!(extract_registration_number("Nro Matricula:"), None);
        assert_eq!(extract_registration_number("Matricula: 50C-1"), None);
        assert_eq!(extract_registration_number("nro. matricula: 50C-1"), None);
    }
}
