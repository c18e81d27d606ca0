use serde::Serialize;
use std::collections::HashMap;

/// Payload an action hands back on success: a view to render, a redirect
/// target, or a JSON document. View rendering itself happens outside this
/// crate; the template name and data travel through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    View {
        template: String,
        data: serde_json::Value,
    },
    Redirect(String),
    Json(serde_json::Value),
}

impl ActionResult {
    pub fn view(template: impl Into<String>, data: serde_json::Value) -> Self {
        ActionResult::View {
            template: template.into(),
            data,
        }
    }

    pub fn redirect(target: impl Into<String>) -> Self {
        ActionResult::Redirect(target.into())
    }

    pub fn json(value: serde_json::Value) -> Self {
        ActionResult::Json(value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
pub enum ResponseBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
}
