//! # Event Model Seam
//!
//! The minimal surface this crate needs from the host logging pipeline:
//! an event that accepts properties, a factory that builds them, and the
//! property types exchanged across the boundary. The pipeline keeps
//! ownership of its event representation; enrichers only add to it.

pub mod factory;
pub mod property;

pub use factory::{DefaultPropertyFactory, PropertyFactory};
pub use property::{LogProperty, PropertyValue};

/// A log event that enrichers can attach properties to.
///
/// Implementations own the idempotent-merge rule: a property is added only
/// when no property with the same name exists on the event (first writer
/// wins). Enrichers never remove or overwrite properties.
pub trait LogEvent {
    /// Add the property unless the event already carries one with that name.
    fn add_property_if_absent(&mut self, property: LogProperty);
}
