use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    /// Named-lookup miss. Raised by `UrlGenerator::route`; `Router::route`
    /// maps the same condition to `None` instead. Both behaviors are
    /// intentional and serve different callers.
    #[error("route '{name}' is not defined")]
    RouteNotFound { name: String },

    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid HTTP method '{0}'")]
    InvalidMethod(String),

    #[error("container cannot resolve '{key}': {reason}")]
    Resolution { key: String, reason: String },

    #[error("cannot invoke {controller}::{method}: {reason}")]
    Invocation {
        controller: String,
        method: String,
        reason: String,
    },
}
