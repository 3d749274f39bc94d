//! # correlog
//!
//! Request correlation enrichment for structured logging pipelines.
//!
//! This crate provides the enrichment step that correlates log events with
//! the inbound request that produced them:
//! - A process-wide, lock-free request ID allocator
//! - An explicit request scope with a typed, once-settable ID slot
//! - An `Enricher` seam for logging pipelines, plus the built-in
//!   [`RequestPropertiesEnricher`] that adds `HttpRequestId` and
//!   `HttpSessionId` properties to events
//! - Test fixtures and assertions for pipeline integrations

// Core modules
pub mod context;
pub mod enrichers;
pub mod errors;
pub mod event;
pub mod foundation;
pub mod logging;
pub mod testing;

// Main enrichment API
pub use enrichers::{Enricher, RequestPropertiesConfig, RequestPropertiesEnricher};
pub use errors::{EnrichError, EnrichResult};

// Re-export context types
pub use context::{RequestContext, RequestIdAllocator, Session};

// Re-export event model seam
pub use event::{DefaultPropertyFactory, LogEvent, LogProperty, PropertyFactory, PropertyValue};

// Re-export shared constants
pub use foundation::constants::{PROPERTY_HTTP_REQUEST_ID, PROPERTY_HTTP_SESSION_ID};

// Re-export logging types
pub use logging::{init_logging, LoggingConfig};

// Re-export testing utilities (for development and testing)
pub use testing::{EventAssertions, MemoryEvent};
