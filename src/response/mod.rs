pub mod serializer;
pub mod types;

pub use serializer::{create_response, render, serialize_response_body};
pub use types::{ActionResult, HttpResponse, ResponseBody};
