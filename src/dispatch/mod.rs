pub mod binding;
pub mod router;

pub use binding::{bind_arguments, ArgValue, Controller, DeclaredType, ParamSpec};
pub use router::{DispatchOutcome, Router};
