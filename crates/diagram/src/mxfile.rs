//! Extraction of `mxGraphModel` pages from Draw.io file content.
//!
//! A `.drawio` file is either a bare `<mxGraphModel>` document or an
//! `<mxfile>` wrapper holding one `<diagram>` element per page, each with an
//! optionally compressed payload (see [`crate::payload`]).

use regex::Regex;
use serde::Serialize;

use crate::error::DiagramError;
use crate::payload::decode_payload;

/// A single page of a Draw.io file, decoded to its graph model XML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramPage {
    /// Page name from the `<diagram name="...">` attribute, when present.
    pub name: Option<String>,
    /// The `<mxGraphModel>...</mxGraphModel>` element for this page.
    pub graph_model: String,
}

/// Extracts all pages of a Draw.io file in document order.
pub fn extract_pages(content: &str) -> Result<Vec<DiagramPage>, DiagramError> {
    if content.trim().is_empty() {
        return Err(DiagramError::EmptyFile);
    }

    if !content.contains("<mxfile") {
        // Bare model file: one unnamed page.
        let model = find_graph_model(content).ok_or(DiagramError::MissingGraphModel)?;
        return Ok(vec![DiagramPage {
            name: None,
            graph_model: model,
        }]);
    }

    let diagram_re = Regex::new(r"(?s)<diagram\b([^>]*)>(.*?)</diagram>").unwrap();
    let name_re = Regex::new(r#"name="([^"]*)""#).unwrap();

    let mut pages = Vec::new();
    for caps in diagram_re.captures_iter(content) {
        let decoded = decode_payload(&caps[2]).ok_or(DiagramError::MissingGraphModel)?;
        let graph_model = find_graph_model(&decoded).ok_or(DiagramError::MissingGraphModel)?;
        let name = name_re.captures(&caps[1]).map(|c| c[1].to_string());
        pages.push(DiagramPage { name, graph_model });
    }

    if pages.is_empty() {
        return Err(DiagramError::NoDiagram);
    }
    tracing::debug!(pages = pages.len(), "extracted diagram pages");
    Ok(pages)
}

/// Extracts the graph model of the first page, the one a viewer renders.
pub fn extract_graph_model(content: &str) -> Result<String, DiagramError> {
    let mut pages = extract_pages(content)?;
    Ok(pages.remove(0).graph_model)
}

/// Finds the first complete `<mxGraphModel>` element in `text`.
fn find_graph_model(text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)<mxGraphModel\b[^>]*/>|<mxGraphModel\b.*?</mxGraphModel>").unwrap();
    re.find(text).map(|m| m.as_str().to_string())
}
