use crate::dispatch::Controller;
use crate::errors::RouterError;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// The dependency-resolution capability the router consumes. A resolve
/// failure propagates as an error and is absorbed at the dispatch boundary.
pub trait Container: Send + Sync {
    fn get(&self, key: &str) -> Result<Box<dyn Any + Send + Sync>, RouterError>;
}

type Factory = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

/// Factory-backed container. Every `get` runs the factory, so typed request
/// objects come out as fresh instances. Controllers are registered as shared
/// `Arc<dyn Controller>` handles and cloned per resolve.
#[derive(Default)]
pub struct BasicContainer {
    factories: HashMap<String, Factory>,
}

impl BasicContainer {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, key: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Any + Send + Sync> + Send + Sync + 'static,
    {
        self.factories.insert(key.into(), Box::new(factory));
    }

    pub fn register_controller(
        &mut self,
        key: impl Into<String>,
        controller: Arc<dyn Controller>,
    ) {
        self.register(key, move || Box::new(controller.clone()));
    }
}

impl Container for BasicContainer {
    fn get(&self, key: &str) -> Result<Box<dyn Any + Send + Sync>, RouterError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| RouterError::Resolution {
                key: key.to_string(),
                reason: "not registered".to_string(),
            })?;
        Ok(factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_registered_factory() {
        let mut container = BasicContainer::new();
        container.register("answer", || Box::new(42u32));

        let boxed = container.get("answer").unwrap();
        assert_eq!(*boxed.downcast::<u32>().unwrap(), 42);
    }

    #[test]
    fn test_resolve_unregistered_key() {
        let container = BasicContainer::new();
        assert!(matches!(
            container.get("missing"),
            Err(RouterError::Resolution { .. })
        ));
    }

    #[test]
    fn test_factory_returns_fresh_instances() {
        let mut container = BasicContainer::new();
        container.register("list", || Box::new(Vec::<String>::new()));

        let mut first = container.get("list").unwrap().downcast::<Vec<String>>().unwrap();
        first.push("a".to_string());
        let second = container.get("list").unwrap().downcast::<Vec<String>>().unwrap();
        assert!(second.is_empty());
    }
}
