use std::collections::HashMap;

pub mod helpers;

pub use helpers::traits::bytes::ByteScanner;
pub use helpers::traits::form::FormUrlencoded;
pub use helpers::traits::http_request::{BodyError, MultiPart, RequestUtils};
pub use helpers::traits::GetHeaderChild;

pub mod external {
    pub use serde;
    pub use serde_json;
}

#[macro_export]
macro_rules! dev_print {
    ($($rest:tt)*) => {
        if cfg!(feature = "debug") {
            println!($($rest)*)
        }
    };
}

/// Header map with keys normalized to lowercase at insertion time.
///
/// One value per name: inserting an existing name overwrites it. Lookups
/// normalize the queried name too, so `get("Content-Type")` and
/// `get("content-type")` hit the same entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    pub fn new() -> Headers {
        Headers(HashMap::new())
    }

    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        self.0.insert(name.as_ref().to_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Headers {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// An inbound HTTP request after request-line and header parsing.
///
/// The upstream connection layer fills in every field; this crate only
/// reads them. `query_params` keeps duplicate keys in arrival order, and
/// `body` holds the raw, undecoded bytes.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub path: String,
    pub query_params: Vec<(String, String)>,
    pub method: String,
    pub headers: Headers,
    pub body: Vec<u8>,
    pub address: Option<String>,
    pub params: HashMap<String, String>,
}

impl HttpRequest {
    pub fn new() -> HttpRequest {
        HttpRequest::default()
    }

    /// Checks if a comma-separated header contains a specific token.
    ///
    /// Header items are trimmed and lowercased before comparison, so pass
    /// the token in lowercase.
    pub fn has_token_for_header(&self, header_name: &str, token: &str) -> bool {
        let Some(header_value) = self.headers.get(header_name) else {
            return false;
        };
        header_value
            .split(',')
            .any(|item| item.trim().to_lowercase() == token)
    }
}
