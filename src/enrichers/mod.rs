//! # Enrichers
//!
//! Pipeline stages that add contextual properties to log events before they
//! reach a sink. Enrichment is best-effort: an enricher may add fewer
//! properties than usual (or none), but it never fails the log call or the
//! request being handled.

pub mod request_properties;

pub use request_properties::{RequestPropertiesConfig, RequestPropertiesEnricher};

use crate::context::RequestContext;
use crate::event::{LogEvent, PropertyFactory};

/// A log event enricher.
///
/// The request scope is passed explicitly; `None` means enrichment was
/// invoked outside any request (startup, background work) and implementations
/// that depend on request state must treat it as a no-op.
pub trait Enricher: Send + Sync + std::fmt::Debug {
    /// Add properties to the event, sourcing values from the request scope.
    fn enrich(
        &self,
        scope: Option<&RequestContext>,
        event: &mut dyn LogEvent,
        factory: &dyn PropertyFactory,
    );

    /// Optional enricher name for diagnostics
    fn name(&self) -> &'static str {
        "Enricher"
    }
}
