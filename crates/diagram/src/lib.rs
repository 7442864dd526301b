//! Draw.io file decoding.
//!
//! This crate turns raw `.drawio` file content into renderable
//! `mxGraphModel` XML:
//! - payload decoding for compressed `<diagram>` elements
//!   (base64 + raw deflate + percent-encoding)
//! - page extraction from `<mxfile>` wrappers and bare model files

pub mod error;
pub mod mxfile;
pub mod payload;

pub use error::DiagramError;
pub use mxfile::{DiagramPage, extract_graph_model, extract_pages};
pub use payload::decode_payload;
