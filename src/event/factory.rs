//! Property construction seam.

use super::property::{LogProperty, PropertyValue};

/// Factory for creating new properties to add to an event.
///
/// Supplied by the logging pipeline so that property construction policy
/// (name interning, value normalization) stays outside the enrichers.
pub trait PropertyFactory: Send + Sync {
    fn create_property(&self, name: &str, value: PropertyValue) -> LogProperty;
}

/// Pass-through factory with no construction policy.
#[derive(Debug, Clone, Default)]
pub struct DefaultPropertyFactory;

impl DefaultPropertyFactory {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyFactory for DefaultPropertyFactory {
    fn create_property(&self, name: &str, value: PropertyValue) -> LogProperty {
        LogProperty::new(name, value)
    }
}
