use crate::dispatch::DispatchOutcome;
use crate::response::types::{ActionResult, HttpResponse, ResponseBody};
use std::collections::HashMap;

pub fn create_response(status: u16, body: ResponseBody) -> HttpResponse {
    let mut headers = HashMap::new();
    match &body {
        ResponseBody::Json(_) => {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        ResponseBody::Text(_) => {
            headers.insert("Content-Type".to_string(), "text/html".to_string());
        }
        ResponseBody::Empty => {}
    }
    HttpResponse {
        status_code: status,
        headers,
        body,
    }
}

/// Default HTTP-facing rendering of a dispatch outcome. A routing miss
/// becomes 404; a resolution or invocation failure becomes a generic 500.
/// Callers that want to surface `Failed` differently match on the outcome
/// before rendering.
pub fn render(outcome: &DispatchOutcome) -> HttpResponse {
    match outcome {
        DispatchOutcome::Completed(ActionResult::Json(value)) => {
            create_response(200, ResponseBody::Json(value.clone()))
        }
        DispatchOutcome::Completed(ActionResult::View { template, .. }) => {
            create_response(200, ResponseBody::Text(template.clone()))
        }
        DispatchOutcome::Completed(ActionResult::Redirect(target)) => {
            let mut response = create_response(302, ResponseBody::Empty);
            response
                .headers
                .insert("Location".to_string(), target.clone());
            response
        }
        DispatchOutcome::NoMatch => {
            create_response(404, ResponseBody::Text("Not Found".to_string()))
        }
        DispatchOutcome::Failed(_) => {
            create_response(500, ResponseBody::Text("Server Error".to_string()))
        }
    }
}

pub fn serialize_response_body(body: &ResponseBody) -> Vec<u8> {
    match body {
        ResponseBody::Empty => vec![],
        ResponseBody::Json(value) => serde_json::to_vec(value).unwrap_or_default(),
        ResponseBody::Text(text) => text.as_bytes().to_vec(),
    }
}
