//! Input-source selection.
//!
//! Where the text comes from is a capability: each source owns only its own
//! configuration and knows nothing about the analyzer. The CLI resolves its
//! flags into one boxed [`InputSource`] and reads exactly once.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while obtaining the input text.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist.
    #[error("File '{path}' does not exist")]
    NotFound { path: String },

    /// Reading the source failed.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// A source of input text.
pub trait InputSource {
    fn read(&self) -> Result<String, InputError>;
}

/// Reads stdin to end of input.
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn read(&self) -> Result<String, InputError> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| InputError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(text)
    }
}

/// Reads a file; owns only its path.
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for FileInput {
    fn read(&self) -> Result<String, InputError> {
        if !self.path.exists() {
            return Err(InputError::NotFound {
                path: self.path.display().to_string(),
            });
        }

        fs::read_to_string(&self.path).map_err(|source| InputError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Wraps text handed over on the command line.
pub struct LiteralInput(pub String);

impl InputSource for LiteralInput {
    fn read(&self) -> Result<String, InputError> {
        Ok(self.0.clone())
    }
}

/// Resolve CLI flags into an input source.
///
/// An explicit `--text` argument wins; otherwise `-` selects stdin and
/// anything else is treated as a file path.
pub fn resolve_input(text: &Option<String>, input: &str) -> Box<dyn InputSource> {
    match text {
        Some(literal) => Box::new(LiteralInput(literal.clone())),
        None if input == "-" => Box::new(ConsoleInput),
        None => Box::new(FileInput::new(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_input_returns_its_text() {
        let source = LiteralInput("Ala ma kota".to_string());
        assert_eq!(source.read().unwrap(), "Ala ma kota");
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let source = FileInput::new("definitely/not/here.txt");
        let err = source.read().unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn resolve_prefers_literal_text() {
        let source = resolve_input(&Some("inline".to_string()), "ignored.txt");
        assert_eq!(source.read().unwrap(), "inline");
    }

    #[test]
    fn resolve_treats_non_dash_as_file_path() {
        let source = resolve_input(&None, "missing-fixture.txt");
        assert!(matches!(
            source.read().unwrap_err(),
            InputError::NotFound { .. }
        ));
    }
}
