//! # VIADUCT CORE LIBRARY
//!
//! **ROUTING AND REQUEST-DISPATCH CORE FOR WEB APPLICATIONS**
//!
//! **ARCHITECTURE**: Declarative route table, frozen after bootstrap;
//! pattern-matched URIs with named captures; declared-parameter binding
//! into controller actions via an injected container.
//! **GUARANTEE**: Dispatch never propagates errors: only a completed
//! result, a first-class no-match, or a typed failure leave the router.

pub mod container;
pub mod dispatch;
pub mod errors;
pub mod request;
pub mod response;
pub mod routing;
pub mod url;

pub use container::{BasicContainer, Container};
pub use dispatch::{ArgValue, Controller, DispatchOutcome, ParamSpec, Router};
pub use errors::RouterError;
pub use request::HttpRequest;
pub use response::{ActionResult, HttpResponse};
pub use routing::{get_pattern, Action, HttpMethod, RouteCollection, RouteTable};
pub use url::UrlGenerator;
