//! Document-analysis models (Textract-style `Blocks` records).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExtractionError, Result};

/// A parsed document-analysis response.
///
/// Built with [`Document::from_value`], which reads each block on its own so
/// one malformed record does not reject the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    /// Blocks in reading order.
    pub blocks: Vec<Block>,
}

/// One unit of recognized content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Block kind; `None` when `BlockType` is missing or not a string.
    pub block_type: Option<BlockType>,

    /// Recognized text, possibly mis-encoded or accented. `None` when
    /// `Text` is missing or not a string.
    pub text: Option<String>,
}

/// Kind of a block. Only [`BlockType::Line`] carries extractable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Page,
    Line,
    Word,
    /// Any other block kind (tables, key-value sets, selection elements...).
    #[serde(other)]
    Other,
}

impl BlockType {
    /// Map a `BlockType` string; unknown kinds become [`BlockType::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "PAGE" => Self::Page,
            "LINE" => Self::Line,
            "WORD" => Self::Word,
            _ => Self::Other,
        }
    }
}

impl Document {
    /// Create a document from blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse a document from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a document from an already parsed JSON value.
    ///
    /// The root must be an object. A missing `Blocks` key gives an empty
    /// document; a `Blocks` value that is not an array is rejected. Entries
    /// are read with [`Block::from_value`] and never fail.
    pub fn from_value(value: Value) -> Result<Self> {
        let Some(root) = value.as_object() else {
            return Err(ExtractionError::InvalidDocument(
                "root is not a JSON object".to_string(),
            )
            .into());
        };

        let blocks = match root.get("Blocks") {
            None => Vec::new(),
            Some(Value::Array(records)) => records.iter().map(Block::from_value).collect(),
            Some(_) => {
                return Err(ExtractionError::InvalidDocument(
                    "`Blocks` is not an array".to_string(),
                )
                .into());
            }
        };

        Ok(Self { blocks })
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Block {
    /// Create a block of the given kind.
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Self {
            block_type: Some(block_type),
            text: Some(text.into()),
        }
    }

    /// Read one block record leniently.
    ///
    /// Non-object records and fields of the wrong type read as absent; the
    /// parser then skips (or, in strict mode, rejects) blocks without a type.
    pub fn from_value(record: &Value) -> Self {
        Self {
            block_type: record
                .get("BlockType")
                .and_then(Value::as_str)
                .map(BlockType::from_name),
            text: record
                .get("Text")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Create a `LINE` block.
    pub fn line(text: impl Into<String>) -> Self {
        Self::new(BlockType::Line, text)
    }

    /// Whether this block is a `LINE`.
    pub fn is_line(&self) -> bool {
        self.block_type == Some(BlockType::Line)
    }

    /// Text content, empty when absent.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
