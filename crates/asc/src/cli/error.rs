//! User-facing errors with context and suggestions.

use asc_resources::{Kind, SourceError};
use std::fmt;
use std::path::Path;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_suggestions(
        mut self,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(Into::into));
        self
    }

    // === Common error constructors ===

    pub fn file_not_found(path: &Path) -> Self {
        Self::new(format!("File not found: {}", path.display()))
            .with_context("The --input file does not exist")
            .with_suggestions([
                format!("TRY: Check the path: ls -la {}", path.display()),
                "TRY: Pipe the document instead: aws ... | asc <service> ls".to_string(),
            ])
    }

    pub fn cannot_read_input(origin: &str, reason: &str) -> Self {
        Self::new(format!("Cannot read input: {origin}"))
            .with_context(reason.to_string())
            .with_suggestion("TRY: Check that the file is readable and UTF-8 encoded")
    }

    pub fn invalid_document(origin: &str, kind: Kind, err: &SourceError) -> Self {
        Self::new(format!("Cannot read {kind} records from {origin}"))
            .with_context(err.to_string())
            .with_suggestions([
                format!(
                    "TRY: Pass the JSON output of the matching describe call (top-level `{}` key)",
                    kind.envelope()
                ),
                "TRY: Validate the document: jq . FILE".to_string(),
            ])
    }

    pub fn record_not_found(kind: Kind, id: &str, known: &[&str]) -> Self {
        let err = Self::new(format!("No {kind} matches '{id}'"))
            .with_context(format!("{} record(s) in the input", known.len()));
        if known.is_empty() {
            err.with_suggestion("TRY: Check that the input holds records of this kind")
        } else {
            let sample: Vec<&str> = known.iter().copied().take(5).collect();
            err.with_suggestions([
                format!("TRY: One of: {}", sample.join(", ")),
                "TRY: Names, ids and ARNs are all accepted".to_string(),
            ])
        }
    }

    pub fn invalid_config(path: &Path, reason: &str) -> Self {
        Self::new(format!("Invalid config file: {}", path.display()))
            .with_context(reason.to_string())
            .with_suggestions([
                "TRY: Fix the reported key, or remove the file to use defaults".to_string(),
                "TRY: Point ASC_CONFIG or --config at another file".to_string(),
            ])
    }

    pub fn invalid_layout(value: &str) -> Self {
        Self::new(format!("Unknown detail layout: '{value}'"))
            .with_suggestion("TRY: Use one of: vertical, horizontal, grid")
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {ctx}")?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {suggestion}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}
