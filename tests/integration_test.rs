use form_http::{HttpRequest, RequestUtils};

fn form_request(body: &[u8]) -> HttpRequest {
    let mut request = HttpRequest::new();
    request.method = "POST".into();
    request.path = "/submit".into();
    request
        .headers
        .insert("content-type", "application/x-www-form-urlencoded");
    request.body = body.to_vec();
    request
}

#[test]
fn urlencoded_round_trip() {
    let fields = vec![
        ("title".to_string(), "hello world".to_string()),
        ("tags".to_string(), "a&b=c".to_string()),
        ("tags".to_string(), "second".to_string()),
        ("empty".to_string(), "".to_string()),
    ];
    let body = fields
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let request = form_request(body.as_bytes());
    assert_eq!(request.parse_urlencoded_form(), fields);
}

#[test]
fn wrong_decoder_yields_empty_not_error() {
    // Callers may probe both decoders; the mismatching one stays silent.
    let request = form_request(b"a=1&b=2");
    assert!(request.parse_multipart_form_data().is_empty());

    let mut upload = HttpRequest::new();
    upload
        .headers
        .insert("Content-Type", "multipart/form-data; boundary=XYZ");
    upload.body =
        b"--XYZ\r\nContent-Disposition: form-data; name=\"field1\"\r\n\r\nhello\r\n--XYZ--\r\n"
            .to_vec();
    assert!(upload.parse_urlencoded_form().is_empty());
    assert_eq!(upload.parse_multipart_form_data().len(), 1);
}

#[test]
fn browser_style_multipart_upload() {
    let boundary = "----WebKitFormBoundary7MA4YWxkTrZu0gW";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nfirst line\r\nsecond line\r\n--{b}\r\nContent-Disposition: form-data; name=\"attachment\"; filename=\"notes.md\"\r\nContent-Type: text/markdown\r\n\r\n# notes\r\n--{b}--\r\n",
        b = boundary
    );

    let mut request = HttpRequest::new();
    request.method = "POST".into();
    request.headers.insert(
        "content-type",
        format!("multipart/form-data; boundary={}", boundary),
    );
    request.body = body.into_bytes();

    let parts = request.parse_multipart_form_data();
    assert_eq!(parts.len(), 2);

    assert_eq!(parts[0].name(), Some("comment"));
    assert_eq!(parts[0].body, b"first line\r\nsecond line".to_vec());

    assert_eq!(parts[1].name(), Some("attachment"));
    assert_eq!(parts[1].file_name(), Some("notes.md"));
    assert_eq!(parts[1].headers.get("content-type"), Some("text/markdown"));
    assert_eq!(parts[1].body, b"# notes".to_vec());
}

#[test]
fn quoted_boundary_in_content_type() {
    let mut request = HttpRequest::new();
    request
        .headers
        .insert("content-type", "multipart/form-data; boundary=\"quoted\"");
    request.body = b"--quoted\r\nContent-Disposition: form-data; name=\"a\"\r\n\r\n1\r\n--quoted--\r\n".to_vec();

    let parts = request.parse_multipart_form_data();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name(), Some("a"));
}

#[test]
fn headers_populated_in_any_case_are_found() {
    let mut request = form_request(b"a=1");
    request.headers.insert("Content-Type", "application/x-www-form-urlencoded");
    assert_eq!(
        request.parse_urlencoded_form(),
        vec![("a".to_string(), "1".to_string())]
    );
}
