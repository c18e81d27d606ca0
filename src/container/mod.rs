pub mod resolver;

pub use resolver::{BasicContainer, Container};
