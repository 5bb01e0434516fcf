//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variables that override the configured input directory.
pub const INPUT_PATH_VARS: [&str; 2] = ["FOLIO_INPUT_PATH", "input_path"];

/// Environment variables that override the configured output CSV path.
pub const OUTPUT_PATH_VARS: [&str; 2] = ["FOLIO_OUTPUT_PATH", "output_path"];

/// Main configuration for the folio pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Input and output locations.
    pub paths: PathsConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// CSV output configuration.
    pub output: OutputConfig,
}

/// Batch input directory and output CSV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory scanned for `*.json` documents.
    pub input: Option<PathBuf>,

    /// CSV file written by the batch command.
    pub output: Option<PathBuf>,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fail the document when a block has no `BlockType` instead of skipping it.
    pub strict_blocks: bool,
}

/// CSV output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Header naming scheme.
    pub column_names: ColumnNaming,

    /// Prepend a `source` column with the input file name.
    pub include_source: bool,
}

/// Header naming scheme for CSV output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnNaming {
    /// `registration_number`, `print_date`, ...
    #[default]
    Field,
    /// `Numero_de_matricula`, `Fecha_de_impresion`, ...
    Legacy,
}

impl FolioConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply path overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply path overrides using `lookup` to read variables.
    ///
    /// The first non-empty variable in each list wins.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| lookup(*k))
                .find(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        if let Some(input) = first(&INPUT_PATH_VARS) {
            self.paths.input = Some(input);
        }
        if let Some(output) = first(&OUTPUT_PATH_VARS) {
            self.paths.output = Some(output);
        }
    }
}
