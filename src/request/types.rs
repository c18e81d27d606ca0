use crate::request::parser::parse_query_string;
use crate::routing::HttpMethod;
use std::collections::HashMap;

/// Read-only facts about one incoming request. Built by the HTTP layer;
/// this crate only consumes `method`, `path`, and server variables.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: HttpMethod,
    path: String,
    headers: HashMap<String, String>,
    query_params: HashMap<String, String>,
    server: HashMap<String, String>,
}

impl HttpRequest {
    /// A `?query` suffix on `path` is split off and percent-decoded into
    /// `query_params`; the stored path is the raw path component.
    pub fn new(method: HttpMethod, path: &str) -> Self {
        let (path, query_params) = match path.split_once('?') {
            Some((p, q)) => (p.to_string(), parse_query_string(q)),
            None => (path.to_string(), HashMap::new()),
        };
        Self {
            method,
            path,
            headers: HashMap::new(),
            query_params,
            server: HashMap::new(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(HttpMethod::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(HttpMethod::POST, path)
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_server(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.server.insert(key.into(), value.into());
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }

    /// Server variable lookup (`HTTP_HOST`, `SCRIPT_NAME`, ...).
    pub fn server(&self, key: &str) -> Option<&str> {
        self.server.get(key).map(String::as_str)
    }
}
