//! Transport-neutral descriptions of an outgoing request and a completed response.

/// HTTP method of an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Head,
    Put,
    Post,
    Delete,
}

impl RequestMethod {
    /// True only for plain content retrieval (GET). Uploads and HEAD requests are not.
    pub fn is_retrieval(self) -> bool {
        matches!(self, RequestMethod::Get)
    }
}

/// Outgoing request: method, URL and headers in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    method: RequestMethod,
    url: String,
    headers: Vec<(String, String)>,
}

impl TransportRequest {
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(RequestMethod::Put, url)
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// First value for `name`, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Status and headers of a completed response (final hop only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    status: u32,
    headers: Vec<(String, String)>,
}

impl TransportResponse {
    pub fn new(status: u32) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    pub fn status(&self) -> u32 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value for `name`, matched case-insensitively.
    pub fn first_header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Builds a response from raw header lines as delivered by the HTTP client.
    ///
    /// Each `HTTP/x.y NNN ...` status line starts a new hop and discards the
    /// headers collected so far, so after redirects only the final response
    /// remains. Lines without a colon are ignored.
    pub fn from_header_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut response = Self::default();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("HTTP/") {
                response.headers.clear();
                response.status = line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|code| code.parse().ok())
                    .unwrap_or(0);
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                response.add_header(name.trim(), value.trim());
            }
        }
        response
    }
}

fn first_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_get_is_retrieval() {
        assert!(RequestMethod::Get.is_retrieval());
        for m in [
            RequestMethod::Head,
            RequestMethod::Put,
            RequestMethod::Post,
            RequestMethod::Delete,
        ] {
            assert!(!m.is_retrieval(), "{:?}", m);
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = TransportResponse::new(200).with_header("digest", "md5=abc");
        assert_eq!(response.first_header("Digest"), Some("md5=abc"));
        assert_eq!(response.first_header("DIGEST"), Some("md5=abc"));
        assert!(response.first_header("ETag").is_none());
    }

    #[test]
    fn first_of_repeated_headers_wins() {
        let mut request = TransportRequest::get("http://repo.example/a.jar");
        request.add_header("Accept", "one");
        request.add_header("accept", "two");
        assert_eq!(request.header("ACCEPT"), Some("one"));
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn parse_lines_status_and_headers() {
        let lines = [
            "HTTP/1.1 200 OK",
            "Content-Length: 12",
            "Digest: sha=2jmj7l5rSw0yVb/vlWAYkK/YBwk=",
            "",
        ];
        let response = TransportResponse::from_header_lines(&lines);
        assert_eq!(response.status(), 200);
        assert!(response.is_success());
        assert_eq!(
            response.first_header("digest"),
            Some("sha=2jmj7l5rSw0yVb/vlWAYkK/YBwk=")
        );
    }

    #[test]
    fn parse_lines_keeps_only_final_hop() {
        let lines = [
            "HTTP/1.1 302 Found".to_string(),
            "Location: http://mirror.example/a.jar".to_string(),
            "Digest: md5=stale".to_string(),
            "HTTP/1.1 200 OK".to_string(),
            "ETag: \"abc\"".to_string(),
        ];
        let response = TransportResponse::from_header_lines(&lines);
        assert_eq!(response.status(), 200);
        assert!(response.first_header("Digest").is_none());
        assert!(response.first_header("Location").is_none());
        assert_eq!(response.first_header("etag"), Some("\"abc\""));
    }

    #[test]
    fn parse_lines_value_may_contain_colons() {
        let response = TransportResponse::from_header_lines(&["X-Origin: http://a:8080/x"]);
        assert_eq!(response.first_header("X-Origin"), Some("http://a:8080/x"));
    }
}
