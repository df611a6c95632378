//! Loader configuration

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Field separator of a signal file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Any run of spaces or tabs
    #[default]
    Whitespace,
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    /// Byte handed to the CSV reader; `None` for whitespace splitting
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Delimiter::Whitespace => None,
            Delimiter::Comma => Some(b','),
            Delimiter::Semicolon => Some(b';'),
            Delimiter::Tab => Some(b'\t'),
        }
    }
}

/// How to read a signal file
///
/// Rows hold either `time amplitude` or a bare `amplitude`. A bare amplitude
/// takes its sample index as time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub delimiter: Delimiter,
    /// Numbers use `,` as the decimal mark (`0,25`)
    pub decimal_comma: bool,
    /// Skip the first non-blank row
    pub has_header: bool,
    /// Lines starting with this byte are ignored
    pub comment: Option<u8>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Whitespace,
            decimal_comma: false,
            has_header: false,
            comment: Some(b'#'),
        }
    }
}

impl LoadOptions {
    pub fn whitespace() -> Self {
        Self::default()
    }

    pub fn delimited(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }

    pub fn with_decimal_comma(mut self, decimal_comma: bool) -> Self {
        self.decimal_comma = decimal_comma;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimal_comma && self.delimiter == Delimiter::Comma {
            return Err(Error::InvalidParameter(
                "decimal comma cannot be combined with a comma delimiter".to_string(),
            ));
        }
        Ok(())
    }
}
