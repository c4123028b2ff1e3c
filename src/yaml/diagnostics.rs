//! Rich diagnostics for YAML parse failures

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// A YAML syntax/shape error with the offending source attached, so miette
/// can render the file excerpt with a label at the failure point.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse {filename}")]
#[diagnostic(code(tqt::yaml::syntax))]
pub struct YamlSyntaxError {
    /// File the content came from (display only)
    pub filename: String,

    /// Parser message
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{message}")]
    pub span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error and the source it came from
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = SourceOffset::from_location(content, loc.line(), loc.column());
            SourceSpan::new(offset, 1)
        });

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

/// Errors from reading or writing YAML files
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("failed to serialize to YAML: {0}")]
    #[diagnostic(code(tqt::yaml::serialize))]
    Serialize(#[from] serde_yml::Error),

    #[error(transparent)]
    #[diagnostic(code(tqt::yaml::io))]
    Io(#[from] std::io::Error),
}
