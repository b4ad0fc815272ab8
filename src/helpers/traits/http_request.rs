use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dev_print;
use crate::helpers::traits::bytes::ByteScanner;
use crate::helpers::traits::form::FormUrlencoded;
use crate::helpers::traits::GetHeaderChild;
use crate::{Headers, HttpRequest};

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("body is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One decoded section of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPart {
    /// The part's own headers, keys lowercased.
    pub headers: Headers,
    /// The bytes between the header block and the next boundary marker,
    /// with the trailing line terminator stripped.
    pub body: Vec<u8>,
}

impl MultiPart {
    /// The `name` parameter of the part's `Content-Disposition` header.
    pub fn name(&self) -> Option<&str> {
        self.parameter_value("content-disposition", "name")
    }

    /// The `filename` parameter of the part's `Content-Disposition` header.
    pub fn file_name(&self) -> Option<&str> {
        self.parameter_value("content-disposition", "filename")
    }

    fn parameter_value(&self, header_name: &str, parameter: &str) -> Option<&str> {
        self.headers.get(header_name)?.get_header_parameter(parameter)
    }
}

pub trait RequestUtils {
    fn parse_urlencoded_form(&self) -> Vec<(String, String)>;
    fn parse_multipart_form_data(&self) -> Vec<MultiPart>;
    fn get_text(&self) -> Result<String, BodyError>;
    fn get_json(&self) -> Result<serde_json::Value, BodyError>;
    fn get_json_as<T: DeserializeOwned>(&self) -> Result<T, BodyError>;
}

impl RequestUtils for HttpRequest {
    /// Decodes an `application/x-www-form-urlencoded` body into an ordered
    /// field list.
    ///
    /// A missing or mismatched `Content-Type`, or a body that is not valid
    /// UTF-8, yields an empty list rather than an error, so callers can
    /// probe either decoder and use whichever returns data.
    fn parse_urlencoded_form(&self) -> Vec<(String, String)> {
        let Some(content_type) = self.headers.get("content-type") else {
            return Vec::new();
        };
        if content_type.primary_token() != URLENCODED {
            return Vec::new();
        }
        let Ok(text) = std::str::from_utf8(&self.body) else {
            return Vec::new();
        };
        text.parse_urlencoded()
    }

    /// Decodes a `multipart/form-data` body into its parts.
    ///
    /// Requires a `multipart/form-data` content type carrying a non-empty
    /// `boundary` parameter; anything else yields an empty list. A trailing
    /// part cut off before its closing boundary is discarded.
    fn parse_multipart_form_data(&self) -> Vec<MultiPart> {
        let Some(content_type) = self.headers.get("content-type") else {
            return Vec::new();
        };
        if content_type.primary_token() != MULTIPART_FORM_DATA {
            return Vec::new();
        }
        match content_type.get_header_parameter("boundary") {
            Some(boundary) if !boundary.is_empty() => {
                parse_multipart_body(&self.body, &format!("--{}", boundary))
            }
            _ => Vec::new(),
        }
    }

    fn get_text(&self) -> Result<String, BodyError> {
        Ok(std::str::from_utf8(&self.body)?.to_owned())
    }

    fn get_json(&self) -> Result<serde_json::Value, BodyError> {
        if self.body.is_empty() {
            return Ok(serde_json::json!({}));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    fn get_json_as<T: DeserializeOwned>(&self) -> Result<T, BodyError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

fn parse_multipart_body(body: &[u8], marker: &str) -> Vec<MultiPart> {
    let mut scanner = ByteScanner::new(body);
    let mut result = Vec::new();
    while let Some(part) = next_multipart(&mut scanner, marker, result.is_empty()) {
        result.push(part);
    }
    dev_print!("multipart parts: {}", result.len());
    result
}

fn next_multipart(scanner: &mut ByteScanner, marker: &str, is_first: bool) -> Option<MultiPart> {
    if is_first {
        // The body must open with the boundary line itself.
        if scanner.next_line()? != marker {
            return None;
        }
    } else {
        // Line terminator left over from the previous part's boundary.
        let _ = scanner.next_line();
    }

    let mut headers = Headers::new();
    while let Some(line) = scanner.next_line() {
        if line.is_empty() {
            break;
        }
        // Only the first colon is structural; values may contain more.
        let Some(colon_pos) = line.find(':') else {
            continue;
        };
        let name = line[..colon_pos].trim().to_lowercase();
        let value = line[colon_pos + 1..].trim();
        dev_print!("part header: {} = {}", name, value);
        headers.insert(name, value);
    }

    let body = scanner.next_until_marker(marker.as_bytes())?;

    Some(MultiPart { headers, body })
}
