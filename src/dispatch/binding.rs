use crate::container::Container;
use crate::errors::RouterError;
use crate::request::HttpRequest;
use crate::response::ActionResult;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Declared type of one action parameter. `Request` is the base request
/// type; `RequestSubtype` carries the container key of a specialized
/// request object (validated form requests and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Request,
    RequestSubtype(String),
    Named(String),
}

/// One entry of an action's declared parameter list. Attached to the
/// controller once per action; consulted by [`bind_arguments`] on every
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub declared: Option<DeclaredType>,
}

impl ParamSpec {
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: None,
        }
    }

    pub fn request(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Some(DeclaredType::Request),
        }
    }

    pub fn typed_request(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Some(DeclaredType::RequestSubtype(key.into())),
        }
    }

    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Some(DeclaredType::Named(ty.into())),
        }
    }
}

/// A bound argument. Path parameters always arrive as `Str`; no coercion
/// happens here, the action converts as needed.
pub enum ArgValue {
    Null,
    Str(String),
    Request(HttpRequest),
    Instance(Box<dyn Any + Send + Sync>),
}

impl ArgValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_request(&self) -> Option<&HttpRequest> {
        match self {
            ArgValue::Request(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&(dyn Any + Send + Sync)> {
        match self {
            ArgValue::Instance(i) => Some(i.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => f.write_str("Null"),
            ArgValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            ArgValue::Request(r) => f.debug_tuple("Request").field(&r.path()).finish(),
            ArgValue::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

/// A dispatchable handler. `signature` yields the declared parameter list
/// of one action method, `invoke` runs it with a bound argument vector.
pub trait Controller: Send + Sync {
    fn signature(&self, method: &str) -> Option<Vec<ParamSpec>>;

    fn invoke(&self, method: &str, args: Vec<ArgValue>) -> Result<ActionResult, RouterError>;
}

/// Builds the argument vector for one action, in declared order:
///
/// 1. `Request` binds the live request.
/// 2. `RequestSubtype` resolves a fresh instance of that exact type from
///    the container, even when a path parameter shares the name.
/// 3. Untyped and `Named` parameters bind the path parameter with the
///    same name, or `Null` when absent.
pub fn bind_arguments(
    specs: &[ParamSpec],
    request: &HttpRequest,
    path_params: &HashMap<String, String>,
    container: &dyn Container,
) -> Result<Vec<ArgValue>, RouterError> {
    let mut args = Vec::with_capacity(specs.len());
    for spec in specs {
        let value = match &spec.declared {
            Some(DeclaredType::Request) => ArgValue::Request(request.clone()),
            Some(DeclaredType::RequestSubtype(key)) => {
                ArgValue::Instance(container.get(key)?)
            }
            Some(DeclaredType::Named(_)) | None => match path_params.get(&spec.name) {
                Some(value) => ArgValue::Str(value.clone()),
                None => ArgValue::Null,
            },
        };
        args.push(value);
    }
    Ok(args)
}
