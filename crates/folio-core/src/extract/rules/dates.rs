//! Print date extraction ("impreso el 12 de enero de 2023").

use super::patterns::PRINT_DATE;
use super::FieldExtractor;

/// Print date extractor producing `YYYY-MM-DD` strings.
///
/// The date is composed as written; an impossible day such as
/// `31 de febrero` is kept, and an unknown month name maps to `01`.
pub struct PrintDateExtractor;

impl PrintDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrintDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PrintDateExtractor {
    type Output = String;

    fn extract(&self, line: &str) -> Option<Self::Output> {
        let lowered = line.to_lowercase();
        let caps = PRINT_DATE.captures(&lowered)?;

        let day: u32 = caps[1].parse().ok()?;
        let month = spanish_month_to_number(&caps[2]);
        let year = &caps[3];

        Some(format!("{}-{}-{:02}", year, month, day))
    }
}

/// Extract the print date from a line.
pub fn extract_print_date(line: &str) -> Option<String> {
    PrintDateExtractor::new().extract(line)
}

/// Two-digit month number for a Spanish month name, `"01"` when unknown.
pub fn spanish_month_to_number(month: &str) -> &'static str {
    match month.to_lowercase().as_str() {
        "enero" => "01",
        "febrero" => "02",
        "marzo" => "03",
        "abril" => "04",
        "mayo" => "05",
        "junio" => "06",
        "julio" => "07",
        "agosto" => "08",
        "septiembre" => "09",
        "octubre" => "10",
        "noviembre" => "11",
        "diciembre" => "12",
        _ => "01",
    }
}
