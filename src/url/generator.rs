use crate::errors::RouterError;
use crate::request::HttpRequest;
use crate::routing::RouteTable;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Substitutes `{param}` tokens in a URI template with string-cast values.
/// Placeholders with no corresponding entry in `params` are left literally
/// in the output; extra params are ignored.
pub fn fill_template(uri: &str, params: &HashMap<String, Value>) -> String {
    let mut url = uri.to_string();
    for (name, value) in params {
        let token = format!("{{{}}}", name);
        if url.contains(&token) {
            url = url.replace(&token, &value_to_string(value));
        }
    }
    url
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Inverse of route matching: builds URLs from named routes. Unlike
/// [`crate::dispatch::Router::route`], an unknown name here is an error,
/// not `None`, since generator callers treat a missing route as a bug.
pub struct UrlGenerator {
    table: Arc<RouteTable>,
    base_url: Option<String>,
    request: Option<HttpRequest>,
}

impl UrlGenerator {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            table,
            base_url: None,
            request: None,
        }
    }

    /// Explicitly configured base URL; takes precedence over anything
    /// derived from the current request.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Binds the current request so the base URL can be computed from its
    /// server variables when no explicit base is configured.
    pub fn with_request(mut self, request: HttpRequest) -> Self {
        self.request = Some(request);
        self
    }

    pub fn route(
        &self,
        name: &str,
        params: &HashMap<String, Value>,
        absolute: bool,
    ) -> Result<String, RouterError> {
        let route = self
            .table
            .get(name)
            .ok_or_else(|| RouterError::RouteNotFound {
                name: name.to_string(),
            })?;
        Ok(self.to(route.uri(), params, absolute))
    }

    /// Builds a URL from an arbitrary path template.
    pub fn to(&self, uri: &str, params: &HashMap<String, Value>, absolute: bool) -> String {
        let path = fill_template(uri, params);
        if absolute {
            format!("{}{}", self.full(), path)
        } else {
            path
        }
    }

    /// Base URL of the application: the configured value when present,
    /// otherwise `scheme://host` plus the directory part of `SCRIPT_NAME`
    /// (the offset between the web-server document root and the app when
    /// the app is not mounted at the server root). Empty when neither a
    /// base nor a request is available.
    pub fn full(&self) -> String {
        if let Some(base) = &self.base_url {
            return base.trim_end_matches('/').to_string();
        }
        let Some(request) = &self.request else {
            return String::new();
        };
        let scheme = request.server("REQUEST_SCHEME").unwrap_or("http");
        let host = request.server("HTTP_HOST").unwrap_or("localhost");
        let script = request.server("SCRIPT_NAME").unwrap_or("");
        let offset = script
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or("");
        format!("{}://{}{}", scheme, host, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Action, RouteCollection};
    use serde_json::json;

    fn table() -> Arc<RouteTable> {
        let mut routes = RouteCollection::new();
        routes
            .get("/users/{id}", Action::new("UserController", "show"))
            .unwrap()
            .name("users.show");
        routes
            .get("/posts/{post}/comments/{comment}", Action::new("CommentController", "show"))
            .unwrap()
            .name("comments.show");
        Arc::new(routes.freeze())
    }

    fn params(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_fill_template_casts_values() {
        let url = fill_template("/users/{id}", &params(&[("id", json!(42))]));
        assert_eq!(url, "/users/42");
        let url = fill_template("/users/{id}", &params(&[("id", json!("jane"))]));
        assert_eq!(url, "/users/jane");
    }

    #[test]
    fn test_fill_template_leaves_unresolved_placeholders() {
        let url = fill_template(
            "/posts/{post}/comments/{comment}",
            &params(&[("post", json!(7))]),
        );
        assert_eq!(url, "/posts/7/comments/{comment}");
    }

    #[test]
    fn test_route_relative() {
        let generator = UrlGenerator::new(table());
        let url = generator
            .route("users.show", &params(&[("id", json!(42))]), false)
            .unwrap();
        assert_eq!(url, "/users/42");
    }

    #[test]
    fn test_route_unknown_name_is_an_error() {
        let generator = UrlGenerator::new(table());
        assert!(matches!(
            generator.route("unknown", &HashMap::new(), false),
            Err(RouterError::RouteNotFound { .. })
        ));
    }

    #[test]
    fn test_route_absolute_with_configured_base() {
        let generator = UrlGenerator::new(table()).with_base_url("https://example.com/");
        let url = generator
            .route("users.show", &params(&[("id", json!(42))]), true)
            .unwrap();
        assert_eq!(url, "https://example.com/users/42");
    }

    #[test]
    fn test_full_from_request_server_vars() {
        let request = HttpRequest::get("/")
            .with_server("REQUEST_SCHEME", "https")
            .with_server("HTTP_HOST", "example.com")
            .with_server("SCRIPT_NAME", "/app/index.php");
        let generator = UrlGenerator::new(table()).with_request(request);
        assert_eq!(generator.full(), "https://example.com/app");
    }

    #[test]
    fn test_full_at_server_root_has_no_offset() {
        let request = HttpRequest::get("/")
            .with_server("HTTP_HOST", "example.com")
            .with_server("SCRIPT_NAME", "/index.php");
        let generator = UrlGenerator::new(table()).with_request(request);
        assert_eq!(generator.full(), "http://example.com");
    }

    #[test]
    fn test_full_without_base_or_request() {
        let generator = UrlGenerator::new(table());
        assert_eq!(generator.full(), "");
    }

    #[test]
    fn test_to_arbitrary_path() {
        let generator = UrlGenerator::new(table()).with_base_url("https://example.com");
        assert_eq!(
            generator.to("/health", &HashMap::new(), true),
            "https://example.com/health"
        );
        assert_eq!(generator.to("/health", &HashMap::new(), false), "/health");
    }
}
