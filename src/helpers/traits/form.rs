/// Decoding of `application/x-www-form-urlencoded` text.
pub trait FormUrlencoded {
    /// Decodes percent escapes, rejecting the whole string on a malformed
    /// escape or when the decoded bytes are not valid UTF-8.
    fn percent_decoded(&self) -> Option<String>;

    /// Splits `name=value&name=value` text into an ordered field list.
    ///
    /// A raw pair is accepted only when splitting on `=` yields exactly two
    /// tokens and both percent-decode cleanly; anything else is dropped.
    /// Literal `+` becomes a space after percent-decoding, per the form
    /// convention. Duplicate names are kept in order.
    fn parse_urlencoded(&self) -> Vec<(String, String)>;
}

impl FormUrlencoded for str {
    fn percent_decoded(&self) -> Option<String> {
        let bytes = self.as_bytes();
        let mut decoded = Vec::with_capacity(bytes.len());
        let mut pos = 0;
        while pos < bytes.len() {
            match bytes[pos] {
                b'%' => {
                    let high = hex_value(*bytes.get(pos + 1)?)?;
                    let low = hex_value(*bytes.get(pos + 2)?)?;
                    decoded.push(high << 4 | low);
                    pos += 3;
                }
                byte => {
                    decoded.push(byte);
                    pos += 1;
                }
            }
        }
        String::from_utf8(decoded).ok()
    }

    fn parse_urlencoded(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        for pair in self.split('&') {
            let tokens: Vec<&str> = pair.split('=').collect();
            if tokens.len() != 2 {
                continue;
            }
            let (Some(name), Some(value)) = (tokens[0].percent_decoded(), tokens[1].percent_decoded())
            else {
                continue;
            };
            fields.push((name.replace('+', " "), value.replace('+', " ")));
        }
        fields
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
