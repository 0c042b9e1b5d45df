use std::{collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::query::scalar_functions::{
    AbsImpl, ConcatImpl, DateDiffImpl, LowerImpl, RoundImpl, ScalarFunction, UpperImpl, YearImpl,
};

/// Case-insensitive registry of scalar functions. The parser that turns a
/// query string into an expression tree resolves function names here.
#[derive(Default)]
pub struct ScalarFunctionRegistry {
    by_name: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl ScalarFunctionRegistry {
    pub fn new() -> Self { Self { by_name: HashMap::new() } }

    pub fn register<F: ScalarFunction + 'static>(&mut self, function: F) {
        self.by_name.insert(function.name().to_string(), Arc::new(function));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ScalarFunction>> {
        let found = self.by_name.get(&name.to_ascii_lowercase()).cloned();
        if found.is_none() {
            debug!(function = name, "scalar function lookup missed");
        }
        found
    }

    pub fn list(&self) -> Vec<String> {
        let mut v: Vec<_> = self.by_name.keys().cloned().collect();
        v.sort();
        v
    }

    pub fn default_scalar_function_registry() -> Self {
        let mut registry = Self::new();
        registry.register(UpperImpl);
        registry.register(LowerImpl);
        registry.register(ConcatImpl);
        registry.register(YearImpl);
        registry.register(DateDiffImpl);
        registry.register(AbsImpl);
        registry.register(RoundImpl);
        registry
    }
}

static DEFAULT_REGISTRY: Lazy<ScalarFunctionRegistry> =
    Lazy::new(ScalarFunctionRegistry::default_scalar_function_registry);

/// Process-wide registry with the builtin function set.
pub fn default_registry() -> &'static ScalarFunctionRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_builtins_and_lookup_is_case_insensitive() {
        let registry = ScalarFunctionRegistry::default_scalar_function_registry();
        assert_eq!(
            registry.list(),
            vec!["abs", "concat", "datediff", "lower", "round", "upper", "year"]
        );

        assert!(registry.get("YEAR").is_some());
        assert!(registry.get("uPPer").is_some());
        assert!(registry.get("median").is_none());
    }

    #[test]
    fn test_default_registry_is_shared() {
        let a = default_registry().get("year").unwrap();
        let b = default_registry().get("year").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
