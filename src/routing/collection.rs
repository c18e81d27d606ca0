use crate::errors::RouterError;
use crate::routing::pattern;
use crate::routing::types::{Action, HttpMethod, Route};
use std::collections::HashMap;

/// Mutable route registry for the bootstrap phase. Routes are appended in
/// declaration order; [`RouteCollection::freeze`] turns the registry into an
/// immutable [`RouteTable`] for the lifetime of the process.
#[derive(Default)]
pub struct RouteCollection {
    routes: Vec<Route>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn get(
        &mut self,
        uri: &str,
        action: Action,
    ) -> Result<RouteHandle<'_>, RouterError> {
        self.add(HttpMethod::GET, uri, action)
    }

    pub fn post(
        &mut self,
        uri: &str,
        action: Action,
    ) -> Result<RouteHandle<'_>, RouterError> {
        self.add(HttpMethod::POST, uri, action)
    }

    /// Appends a route. Duplicate (method, uri) pairs are not rejected;
    /// the earlier registration simply shadows the later one at match time.
    pub fn add(
        &mut self,
        method: HttpMethod,
        uri: &str,
        action: Action,
    ) -> Result<RouteHandle<'_>, RouterError> {
        let pattern = pattern::compile(uri)?;
        self.routes.push(Route {
            uri: uri.to_string(),
            method,
            action,
            name: None,
            middleware: Vec::new(),
            pattern,
        });
        let index = self.routes.len() - 1;
        Ok(RouteHandle {
            routes: &mut self.routes,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Freezes the registry. The name index is built here; when two routes
    /// share a name the later registration wins the index entry.
    pub fn freeze(self) -> RouteTable {
        let mut names = HashMap::new();
        for (index, route) in self.routes.iter().enumerate() {
            if let Some(name) = &route.name {
                names.insert(name.clone(), index);
            }
        }
        RouteTable {
            routes: self.routes,
            names,
        }
    }
}

/// Borrowed handle to one just-registered route. Chained `name`/`pipes`
/// calls act on that route and no other, so registration reads as
/// `routes.get("/users/{id}", action)?.name("users.show")`.
pub struct RouteHandle<'c> {
    routes: &'c mut Vec<Route>,
    index: usize,
}

impl RouteHandle<'_> {
    /// Sets the route's name. A name is set at most once per route;
    /// setting it twice through the same handle is a registration bug.
    pub fn name(self, name: impl Into<String>) -> Self {
        debug_assert!(
            self.routes[self.index].name.is_none(),
            "route name set twice during registration"
        );
        self.routes[self.index].name = Some(name.into());
        self
    }

    /// Sets the route's middleware pipeline. The list is replaced, not
    /// merged: only the most recent call survives.
    pub fn pipes<I, S>(self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.routes[self.index].middleware =
            middleware.into_iter().map(Into::into).collect();
        self
    }
}

/// Immutable, ordered route table. Shared across concurrent dispatches via
/// `Arc` without synchronization; nothing mutates it after freeze.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    names: HashMap<String, usize>,
}

impl RouteTable {
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    pub fn all(&self) -> &[Route] {
        &self.routes
    }

    /// First route in declaration order whose method and compiled pattern
    /// both match. No specificity scoring: order is the only tiebreaker.
    pub fn match_request(&self, method: HttpMethod, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.method == method && route.pattern.is_match(path))
    }
}
