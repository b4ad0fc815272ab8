pub mod bytes;
pub mod form;
pub mod http_request;

/// Tokenization of `;`-delimited header values, used for `Content-Type`
/// boundary extraction and `Content-Disposition` name/filename extraction.
pub trait GetHeaderChild {
    /// The first `;`-delimited segment, trimmed.
    ///
    /// `"multipart/form-data; boundary=XYZ"` yields `"multipart/form-data"`.
    fn primary_token(&self) -> &str;

    /// Every `key=value` segment, in order.
    ///
    /// Each segment is split at the first `=` only, so values may contain
    /// further `=` characters. Keys and values are trimmed, and one pair of
    /// surrounding double quotes is stripped from the value if present.
    /// Segments without `=` (such as the primary token) are skipped.
    fn get_header_child(&self) -> Vec<(&str, &str)>;

    /// The value of the first `key=value` segment whose key matches `name`.
    fn get_header_parameter(&self, name: &str) -> Option<&str>;
}

impl GetHeaderChild for str {
    fn primary_token(&self) -> &str {
        self.split(';').next().unwrap_or("").trim()
    }

    fn get_header_child(&self) -> Vec<(&str, &str)> {
        let mut parameters = Vec::new();

        // Content-Disposition 형식: form-data; name="field"; filename="file.txt"
        for segment in self.split(';') {
            let segment = segment.trim();
            if let Some(eq_pos) = segment.find('=') {
                let key = segment[..eq_pos].trim();
                let value = unquote(segment[eq_pos + 1..].trim());
                parameters.push((key, value));
            }
        }

        parameters
    }

    fn get_header_parameter(&self, name: &str) -> Option<&str> {
        self.get_header_child()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// Strips exactly one pair of surrounding double quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
