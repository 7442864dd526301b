//! Decoding of `<diagram>` element payloads.
//!
//! Draw.io stores page content either as inline XML or compressed with the
//! chain `percent-encode -> raw deflate -> base64`. Decoding tries the
//! cheapest interpretation first and falls back, so both old uncompressed
//! files and current compressed ones decode with the same entry point.

use std::io::Read;

use base64::Engine as _;
use flate2::read::DeflateDecoder;

/// Decodes a single diagram payload to XML text.
///
/// Returns `None` when the payload is neither XML nor anything
/// base64-decodable into text.
pub fn decode_payload(payload: &str) -> Option<String> {
    // Inline, uncompressed XML.
    if payload.trim_start().starts_with('<') {
        return Some(payload.to_string());
    }

    // Editors wrap the base64 text, so strip all whitespace before decoding.
    let compact: String = payload.split_whitespace().collect();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .ok()?;

    if let Ok(inflated) = inflate_raw(&decoded) {
        if let Ok(text) = urlencoding::decode(&inflated) {
            return Some(text.into_owned());
        }
    }
    tracing::debug!(len = decoded.len(), "payload is not raw-deflate compressed");

    // Not deflated: the base64 layer may wrap percent-encoded or plain text.
    let text = String::from_utf8(decoded).ok()?;
    match urlencoding::decode(&text) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(text),
    }
}

/// Inflates raw-deflate bytes (no zlib header) into UTF-8 text.
fn inflate_raw(bytes: &[u8]) -> std::io::Result<String> {
    let mut decoder = DeflateDecoder::new(bytes);
    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::DeflateEncoder;

    const MODEL: &str = r#"<mxGraphModel dx="800" dy="600"><root><mxCell id="0"/></root></mxGraphModel>"#;

    /// Builds a payload the way Draw.io does: percent-encode, raw deflate,
    /// then base64.
    fn compress(xml: &str) -> String {
        let encoded = urlencoding::encode(xml);
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(encoded.as_bytes()).unwrap();
        let deflated = encoder.finish().unwrap();
        base64::engine::general_purpose::STANDARD.encode(deflated)
    }

    #[test]
    fn inline_xml_passes_through() {
        assert_eq!(decode_payload(MODEL).as_deref(), Some(MODEL));
    }

    #[test]
    fn inline_xml_with_leading_whitespace_passes_through() {
        let padded = format!("\n  {MODEL}");
        assert_eq!(decode_payload(&padded).as_deref(), Some(padded.as_str()));
    }

    #[test]
    fn compressed_payload_decodes() {
        let payload = compress(MODEL);
        assert_eq!(decode_payload(&payload).as_deref(), Some(MODEL));
    }

    #[test]
    fn compressed_payload_with_line_breaks_decodes() {
        let payload = compress(MODEL);
        let mid = payload.len() / 2;
        let wrapped = format!("{}\n    {}", &payload[..mid], &payload[mid..]);
        assert_eq!(decode_payload(&wrapped).as_deref(), Some(MODEL));
    }

    #[test]
    fn base64_of_percent_encoded_text_decodes() {
        let encoded = urlencoding::encode(MODEL);
        let payload = base64::engine::general_purpose::STANDARD.encode(encoded.as_bytes());
        assert_eq!(decode_payload(&payload).as_deref(), Some(MODEL));
    }

    #[test]
    fn base64_of_plain_text_decodes() {
        let payload = base64::engine::general_purpose::STANDARD.encode("not xml but text");
        assert_eq!(decode_payload(&payload).as_deref(), Some("not xml but text"));
    }

    #[test]
    fn invalid_base64_is_none() {
        assert_eq!(decode_payload("!!! not base64 !!!"), None);
    }

    #[test]
    fn undecodable_bytes_are_none() {
        // Valid base64, but neither deflate nor UTF-8.
        let payload = base64::engine::general_purpose::STANDARD.encode([0xff, 0xfe, 0x00, 0x80]);
        assert_eq!(decode_payload(&payload), None);
    }
}
