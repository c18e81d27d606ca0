pub mod generator;

pub use generator::{fill_template, UrlGenerator};
