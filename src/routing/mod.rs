pub mod collection;
pub mod pattern;
pub mod types;

pub use collection::{RouteCollection, RouteHandle, RouteTable};
pub use pattern::{compile, get_pattern, CompiledPattern};
pub use types::{Action, HttpMethod, Route};
