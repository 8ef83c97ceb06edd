//! Plugin configuration route registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plugins announce the route that renders their configuration page so the
//! admin plugins listing can link to it. The application creates one registry
//! at startup and shares it through Leptos context; tests build isolated
//! instances directly.

#[cfg(test)]
#[path = "plugin_config_test.rs"]
mod plugin_config_test;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use leptos::prelude::*;

/// Maps canonical plugin names to configuration routes.
///
/// Clones share the same underlying map. Last write wins; entries are never
/// removed.
#[derive(Clone, Debug, Default)]
pub struct PluginConfigRegistry {
    routes: Arc<RwLock<HashMap<String, String>>>,
}

impl PluginConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the config route for `plugin_name`.
    pub fn expose(&self, plugin_name: impl Into<String>, route: impl Into<String>) {
        let plugin_name = plugin_name.into();
        let route = route.into();
        log::debug!("plugin config route exposed: {plugin_name} -> {route}");

        let mut routes = self.routes.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = routes.insert(plugin_name, route) {
            log::debug!("replaced previous plugin config route {previous}");
        }
    }

    /// Config route for `plugin_name`, if one was exposed.
    pub fn route(&self, plugin_name: &str) -> Option<String> {
        self.routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(plugin_name)
            .cloned()
    }

    /// Names of all plugins with a config route, sorted.
    pub fn plugins(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

/// Create the application registry and provide it to descendants.
pub fn provide_plugin_config_registry() -> PluginConfigRegistry {
    let registry = PluginConfigRegistry::new();
    provide_context(registry.clone());
    registry
}

/// Registry provided by an ancestor, if any.
pub fn use_plugin_config_registry() -> Option<PluginConfigRegistry> {
    use_context::<PluginConfigRegistry>()
}
