//! Reading the describe document from a file or stdin.

use super::error::HelpfulError;
use anyhow::Result;
use asc_resources::{parse_resources, Kind, Resource};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A describe document read once from its origin.
#[derive(Debug, Clone)]
pub struct Document {
    /// `stdin` or the file path, for messages.
    pub origin: String,
    pub text: String,
}

impl Document {
    /// Read `path`, or stdin when `path` is `None` or `-`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path.filter(|p| p.as_os_str() != "-") {
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| HelpfulError::cannot_read_input("stdin", &e.to_string()))?;
                debug!(bytes = text.len(), "read document from stdin");
                Ok(Self::from_text("stdin", text))
            }
            Some(path) => {
                if !path.exists() {
                    return Err(HelpfulError::file_not_found(path).into());
                }
                let origin = path.display().to_string();
                let text = std::fs::read_to_string(path)
                    .map_err(|e| HelpfulError::cannot_read_input(&origin, &e.to_string()))?;
                debug!(path = %origin, bytes = text.len(), "read document");
                Ok(Self::from_text(origin, text))
            }
        }
    }

    pub fn from_text(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Decode every record of `kind`.
    pub fn records(&self, kind: Kind) -> Result<Vec<Resource>> {
        parse_resources(kind, &self.text)
            .map_err(|e| HelpfulError::invalid_document(&self.origin, kind, &e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_from_envelope() {
        let doc = Document::from_text("test", r#"{"Vpcs": [{"VpcId": "vpc-1"}]}"#);
        let records = doc.records(Kind::Vpc).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_wrong_envelope_is_helpful() {
        let doc = Document::from_text("vpcs.json", r#"{"Vpcs": []}"#);
        let err = doc.records(Kind::Stack).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Cannot read stack records from vpcs.json"));
        assert!(message.contains("`Stacks`"));
    }

    #[test]
    fn test_missing_file() {
        let err = Document::read(Some(Path::new("/nonexistent/input.json"))).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
