use crate::errors::RouterError;
use crate::routing::pattern::CompiledPattern;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
    TRACE,
}

impl HttpMethod {
    pub fn parse(method: &str) -> Result<Self, RouterError> {
        match method.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "PUT" => Ok(HttpMethod::PUT),
            "DELETE" => Ok(HttpMethod::DELETE),
            "PATCH" => Ok(HttpMethod::PATCH),
            "HEAD" => Ok(HttpMethod::HEAD),
            "OPTIONS" => Ok(HttpMethod::OPTIONS),
            "TRACE" => Ok(HttpMethod::TRACE),
            _ => Err(RouterError::InvalidMethod(method.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::TRACE => "TRACE",
        };
        f.write_str(s)
    }
}

/// The (controller, method) pair identifying the handler of a route.
/// Resolved lazily at dispatch time, never at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub controller: String,
    pub method: String,
}

impl Action {
    pub fn new(controller: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            method: method.into(),
        }
    }
}

/// A single (method, URI template, action) binding, optionally named and
/// middleware-tagged. Immutable once the owning collection is frozen.
#[derive(Debug, Clone)]
pub struct Route {
    pub(crate) uri: String,
    pub(crate) method: HttpMethod,
    pub(crate) action: Action,
    pub(crate) name: Option<String>,
    pub(crate) middleware: Vec<String>,
    pub(crate) pattern: CompiledPattern,
}

impl Route {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Ordered middleware pipeline identifiers to be run before dispatch.
    /// Pipeline execution itself lives outside this crate.
    pub fn middleware(&self) -> &[String] {
        &self.middleware
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }
}
