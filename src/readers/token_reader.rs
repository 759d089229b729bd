use crate::error::Result;
use crate::models::Token;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads flat coordinate token lists for batch conversion
pub struct TokenReader {
    json: bool,
}

impl TokenReader {
    /// One token per line; blank lines and `#` comments are skipped
    pub fn new() -> Self {
        Self { json: false }
    }

    /// A JSON array of strings and numbers
    pub fn with_json(json: bool) -> Self {
        Self { json }
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<Token>> {
        debug!("Reading coordinate tokens from {}", path.display());
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    pub fn read<R: BufRead>(&self, reader: R) -> Result<Vec<Token>> {
        let tokens = if self.json {
            self.read_json(reader)?
        } else {
            self.read_lines(reader)?
        };

        debug!("Read {} coordinate tokens", tokens.len());
        Ok(tokens)
    }

    fn read_json<R: Read>(&self, reader: R) -> Result<Vec<Token>> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn read_lines<R: BufRead>(&self, reader: R) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            tokens.push(Token::Text(trimmed.to_string()));
        }
        Ok(tokens)
    }
}

impl Default for TokenReader {
    fn default() -> Self {
        Self::new()
    }
}
