//! Extracted certificate fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::config::ColumnNaming;

/// Column names matching the [`FieldMap`] attributes.
pub const FIELD_COLUMNS: [&str; 6] = [
    "registration_number",
    "print_date",
    "department",
    "municipality",
    "rural_subdivision",
    "folio_status",
];

/// Column names used by the earlier Spanish-language reports.
pub const LEGACY_COLUMNS: [&str; 6] = [
    "Numero_de_matricula",
    "Fecha_de_impresion",
    "Departamento",
    "Municipio",
    "Vereda",
    "Estado_de_folio",
];

/// Fields extracted from one certificate. `None` means not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    /// Property registration number (matrícula inmobiliaria).
    pub registration_number: Option<String>,

    /// Print date in `YYYY-MM-DD` form.
    pub print_date: Option<String>,

    /// Department (departamento).
    pub department: Option<String>,

    /// Municipality (municipio).
    pub municipality: Option<String>,

    /// Rural subdivision (vereda).
    pub rural_subdivision: Option<String>,

    /// Folio status, taken from the line after its label.
    pub folio_status: Option<String>,
}

impl FieldMap {
    /// Header row for the given naming scheme.
    pub fn columns(naming: ColumnNaming) -> [&'static str; 6] {
        match naming {
            ColumnNaming::Field => FIELD_COLUMNS,
            ColumnNaming::Legacy => LEGACY_COLUMNS,
        }
    }

    /// Values in column order; absent fields become empty cells.
    pub fn record(&self) -> [&str; 6] {
        [
            self.registration_number.as_deref().unwrap_or(""),
            self.print_date.as_deref().unwrap_or(""),
            self.department.as_deref().unwrap_or(""),
            self.municipality.as_deref().unwrap_or(""),
            self.rural_subdivision.as_deref().unwrap_or(""),
            self.folio_status.as_deref().unwrap_or(""),
        ]
    }

    /// Whether no field was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Print date as a calendar date, if it names a real one.
    pub fn print_date_parsed(&self) -> Option<NaiveDate> {
        self.print_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Check extracted data for obvious problems.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.registration_number.is_none() {
            issues.push("registration number not found".to_string());
        }

        match &self.print_date {
            Some(date) if self.print_date_parsed().is_none() => {
                issues.push(format!("print date {} is not a valid calendar date", date));
            }
            None => issues.push("print date not found".to_string()),
            _ => {}
        }

        let location = [&self.department, &self.municipality, &self.rural_subdivision];
        if location.iter().any(|v| v.is_none()) {
            issues.push("location (department/municipality/vereda) not found".to_string());
        }

        if self.folio_status.as_deref().is_some_and(str::is_empty) {
            issues.push("folio status is empty".to_string());
        }

        issues
    }
}
