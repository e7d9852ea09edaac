//! Preset validator registry.
//!
//! Named descriptors in a schema are resolved against a [`ValidatorRegistry`]
//! at compile time. [`ValidatorRegistry::new`] ships the built-in presets
//! from [`crate::presets`]; applications register additional factories under
//! their own names with [`ValidatorRegistry::register`].

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::presets;
use crate::validation::CompiledValidator;

/// A preset validator factory.
///
/// Invoked at compile time with the descriptor's parameter payload and the
/// field's custom message. Returns the finished validator, or a reason
/// string when the payload is unusable for this preset.
pub type PresetFactory = Arc<
    dyn Fn(Option<&Value>, Option<&str>) -> std::result::Result<CompiledValidator, String>
        + Send
        + Sync,
>;

/// Maps preset names to validator factories.
#[derive(Clone)]
pub struct ValidatorRegistry {
    factories: HashMap<String, PresetFactory>,
}

impl ValidatorRegistry {
    /// Creates a registry with the built-in presets: `min`, `max`, `email`,
    /// `phone`, `url` and `password`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("min", presets::min);
        registry.register("max", presets::max);
        registry.register("email", presets::email);
        registry.register("phone", presets::phone);
        registry.register("url", presets::url);
        registry.register("password", presets::password);
        registry
    }

    /// Creates a registry with no presets at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Option<&Value>, Option<&str>) -> std::result::Result<CompiledValidator, String>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Looks up a factory by name.
    pub fn get(&self, name: &str) -> Option<&PresetFactory> {
        self.factories.get(name)
    }

    /// Returns whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ValidatorRegistry")
            .field("presets", &names)
            .finish()
    }
}
