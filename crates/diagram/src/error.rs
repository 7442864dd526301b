//! Diagram decoding error types.

use thiserror::Error;

/// Errors that can occur while decoding a Draw.io file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    /// The file content is empty or whitespace-only.
    #[error("Empty diagram file")]
    EmptyFile,

    /// The mxfile wrapper contains no diagram pages.
    #[error("Not a valid Draw.io file: no diagram element")]
    NoDiagram,

    /// A diagram payload did not decode to an mxGraphModel element.
    #[error("Not a valid Draw.io file: missing mxGraphModel element")]
    MissingGraphModel,
}
