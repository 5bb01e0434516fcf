//! Location triple extraction (department, municipality, vereda).

use super::patterns::LOCATION;
use super::FieldExtractor;

/// Location read from the "circulo registral" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub department: String,
    pub municipality: String,
    pub rural_subdivision: String,
}

/// Location extractor. Matches only when all three labels are present.
pub struct LocationExtractor;

impl LocationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = Location;

    fn extract(&self, line: &str) -> Option<Self::Output> {
        let caps = LOCATION.captures(line)?;

        Some(Location {
            department: caps[1].trim().to_string(),
            municipality: caps[2].trim().to_string(),
            rural_subdivision: caps[3].trim().to_string(),
        })
    }
}

/// Extract the location triple from a line.
pub fn extract_location(line: &str) -> Option<Location> {
    LocationExtractor::new().extract(line)
}
