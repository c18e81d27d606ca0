use crate::container::Container;
use crate::dispatch::binding::{bind_arguments, Controller};
use crate::errors::RouterError;
use crate::request::HttpRequest;
use crate::response::ActionResult;
use crate::routing::{Route, RouteTable};
use crate::url::fill_template;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of one dispatch. Absence and failure are first-class values:
/// `dispatch` never returns an error to its caller. `NoMatch` is a routing
/// miss; `Failed` is a resolution or invocation error, kept distinguishable
/// so the HTTP layer can render them differently if it wants to.
#[derive(Debug)]
pub enum DispatchOutcome {
    Completed(ActionResult),
    NoMatch,
    Failed(RouterError),
}

impl DispatchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, DispatchOutcome::Completed(_))
    }
}

/// Matches requests against a frozen [`RouteTable`] and invokes controller
/// actions through the injected [`Container`]. Stateless across dispatches;
/// safe to share between threads.
pub struct Router {
    table: Arc<RouteTable>,
    container: Arc<dyn Container>,
}

impl Router {
    pub fn new(table: Arc<RouteTable>, container: Arc<dyn Container>) -> Self {
        Self { table, container }
    }

    pub fn find_route(&self, request: &HttpRequest) -> Option<&Route> {
        self.table.match_request(request.method(), request.path())
    }

    /// Matches, binds, and invokes. Resolution and invocation errors are
    /// logged and folded into [`DispatchOutcome::Failed`].
    pub fn dispatch(&self, request: &HttpRequest) -> DispatchOutcome {
        let route = match self.find_route(request) {
            Some(route) => route,
            None => {
                log::debug!("no route for {} {}", request.method(), request.path());
                return DispatchOutcome::NoMatch;
            }
        };

        match self.run_action(route, request) {
            Ok(result) => DispatchOutcome::Completed(result),
            Err(err) => {
                log::warn!(
                    "dispatch of {} {} failed: {}",
                    request.method(),
                    request.path(),
                    err
                );
                DispatchOutcome::Failed(err)
            }
        }
    }

    fn run_action(
        &self,
        route: &Route,
        request: &HttpRequest,
    ) -> Result<ActionResult, RouterError> {
        // The pattern was compiled from the route's declared URI, so the
        // extracted keys are exactly the template's placeholder names.
        let path_params = route
            .pattern()
            .extract(request.path())
            .unwrap_or_default();

        let action = route.action();
        let controller = self.resolve_controller(&action.controller)?;
        let specs = controller
            .signature(&action.method)
            .ok_or_else(|| RouterError::Invocation {
                controller: action.controller.clone(),
                method: action.method.clone(),
                reason: "no such action method".to_string(),
            })?;

        let args = bind_arguments(&specs, request, &path_params, self.container.as_ref())?;
        controller.invoke(&action.method, args)
    }

    fn resolve_controller(&self, key: &str) -> Result<Arc<dyn Controller>, RouterError> {
        let boxed = self.container.get(key)?;
        boxed
            .downcast::<Arc<dyn Controller>>()
            .map(|arc| *arc)
            .map_err(|_| RouterError::Resolution {
                key: key.to_string(),
                reason: "resolved instance is not a controller".to_string(),
            })
    }

    /// Reverse lookup by route name. Unknown names yield `None` silently;
    /// callers wanting an error use [`crate::url::UrlGenerator::route`].
    pub fn route(&self, name: &str, params: &HashMap<String, Value>) -> Option<String> {
        self.table
            .get(name)
            .map(|route| fill_template(route.uri(), params))
    }
}
