//! # Request Properties Enricher
//!
//! Correlates log events with the request being handled by attaching a
//! per-request sequence number and, when present, the session identifier.

use std::sync::Arc;

use crate::context::{RequestContext, RequestIdAllocator};
use crate::enrichers::Enricher;
use crate::errors::{EnrichError, EnrichResult};
use crate::event::{LogEvent, PropertyFactory, PropertyValue};
use crate::foundation::constants::{PROPERTY_HTTP_REQUEST_ID, PROPERTY_HTTP_SESSION_ID};

/// Configuration for the request properties enricher
#[derive(Debug, Clone)]
pub struct RequestPropertiesConfig {
    /// Property name for the request ID (default: "HttpRequestId")
    pub request_id_property: String,
    /// Property name for the session ID (default: "HttpSessionId")
    pub session_id_property: String,
}

impl Default for RequestPropertiesConfig {
    fn default() -> Self {
        Self {
            request_id_property: PROPERTY_HTTP_REQUEST_ID.to_string(),
            session_id_property: PROPERTY_HTTP_SESSION_ID.to_string(),
        }
    }
}

impl RequestPropertiesConfig {
    /// Check that both property names are usable.
    pub fn validate(&self) -> EnrichResult<()> {
        if self.request_id_property.trim().is_empty() {
            return Err(EnrichError::config("request ID property name is empty"));
        }
        if self.session_id_property.trim().is_empty() {
            return Err(EnrichError::config("session ID property name is empty"));
        }
        if self.request_id_property == self.session_id_property {
            return Err(EnrichError::config(format!(
                "request ID and session ID properties share the name '{}'",
                self.request_id_property
            )));
        }
        Ok(())
    }
}

/// Enricher that adds request and session correlation properties.
///
/// The request ID is allocated from the shared allocator on the first
/// enrichment call within a request and cached in the request context, so
/// every event logged during that request carries the same ID. Allocation
/// happens on first touch: a request consumes an ID as soon as any event is
/// enriched in its scope, whether or not a session exists and whether or not
/// the event is ultimately written.
#[derive(Debug)]
pub struct RequestPropertiesEnricher {
    config: RequestPropertiesConfig,
    allocator: Arc<RequestIdAllocator>,
}

impl RequestPropertiesEnricher {
    /// Create an enricher with the canonical property names.
    pub fn new(allocator: Arc<RequestIdAllocator>) -> Self {
        Self {
            config: RequestPropertiesConfig::default(),
            allocator,
        }
    }

    /// Create an enricher with custom configuration.
    pub fn with_config(
        allocator: Arc<RequestIdAllocator>,
        config: RequestPropertiesConfig,
    ) -> EnrichResult<Self> {
        config.validate()?;
        Ok(Self { config, allocator })
    }

    pub fn config(&self) -> &RequestPropertiesConfig {
        &self.config
    }
}

impl Enricher for RequestPropertiesEnricher {
    fn enrich(
        &self,
        scope: Option<&RequestContext>,
        event: &mut dyn LogEvent,
        factory: &dyn PropertyFactory,
    ) {
        // Outside any request scope enrichment has nothing to correlate.
        let scope = match scope {
            Some(scope) => scope,
            None => return,
        };

        let request_id = scope.request_id_or_allocate(&self.allocator);
        event.add_property_if_absent(factory.create_property(
            &self.config.request_id_property,
            PropertyValue::Integer(request_id),
        ));

        if let Some(session) = scope.session() {
            event.add_property_if_absent(factory.create_property(
                &self.config.session_id_property,
                PropertyValue::String(session.id().to_string()),
            ));
        }
    }

    fn name(&self) -> &'static str {
        "RequestPropertiesEnricher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DefaultPropertyFactory;
    use crate::testing::{
        test_allocator, test_request_context, test_session_context, EventAssertions, MemoryEvent,
    };

    fn test_enricher() -> RequestPropertiesEnricher {
        RequestPropertiesEnricher::new(test_allocator())
    }

    #[test]
    fn test_no_scope_is_a_noop() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();
        let mut event = MemoryEvent::new();

        enricher.enrich(None, &mut event, &factory);

        event.assert_property_count(0);
    }

    #[test]
    fn test_scope_without_session_adds_only_request_id() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();
        let scope = test_request_context();
        let mut event = MemoryEvent::new();

        enricher.enrich(Some(&scope), &mut event, &factory);

        event.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(1));
        event.assert_no_property(PROPERTY_HTTP_SESSION_ID);
        event.assert_property_count(1);
    }

    #[test]
    fn test_scope_with_session_adds_both_properties() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();
        let scope = test_session_context("abc123");
        let mut event = MemoryEvent::new();

        enricher.enrich(Some(&scope), &mut event, &factory);

        event.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(1));
        event.assert_property(
            PROPERTY_HTTP_SESSION_ID,
            PropertyValue::String("abc123".to_string()),
        );
        event.assert_property_count(2);
    }

    #[test]
    fn test_request_id_is_stable_within_a_request() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();
        let scope = RequestContext::new();

        let mut first_event = MemoryEvent::new();
        let mut second_event = MemoryEvent::new();
        enricher.enrich(Some(&scope), &mut first_event, &factory);
        enricher.enrich(Some(&scope), &mut second_event, &factory);

        first_event.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(1));
        second_event.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(1));
    }

    #[test]
    fn test_requests_get_sequential_ids() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();

        let first_request = RequestContext::new();
        let second_request = RequestContext::new();

        let mut e1 = MemoryEvent::new();
        enricher.enrich(Some(&first_request), &mut e1, &factory);
        e1.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(1));

        let mut e2 = MemoryEvent::new();
        enricher.enrich(Some(&second_request), &mut e2, &factory);
        e2.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(2));

        // Re-enriching within the first request keeps its original ID.
        let mut e1_again = MemoryEvent::new();
        enricher.enrich(Some(&first_request), &mut e1_again, &factory);
        e1_again.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(1));
    }

    #[test]
    fn test_double_enrichment_never_duplicates() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();
        let scope = test_session_context("abc123");
        let mut event = MemoryEvent::new();

        enricher.enrich(Some(&scope), &mut event, &factory);
        enricher.enrich(Some(&scope), &mut event, &factory);

        event.assert_property_count(2);
    }

    #[test]
    fn test_existing_property_is_preserved() {
        let enricher = test_enricher();
        let factory = DefaultPropertyFactory::new();
        let scope = RequestContext::new();
        let mut event = MemoryEvent::new();

        event.add_property_if_absent(
            factory.create_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(777)),
        );
        enricher.enrich(Some(&scope), &mut event, &factory);

        event.assert_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(777));
        event.assert_property_count(1);
    }

    #[test]
    fn test_id_allocated_even_when_event_already_carries_one() {
        // First touch consumes an ID regardless of whether the property
        // lands on the event.
        let allocator = Arc::new(RequestIdAllocator::new());
        let enricher = RequestPropertiesEnricher::new(allocator.clone());
        let factory = DefaultPropertyFactory::new();
        let scope = RequestContext::new();
        let mut event = MemoryEvent::new();

        event.add_property_if_absent(
            factory.create_property(PROPERTY_HTTP_REQUEST_ID, PropertyValue::Integer(777)),
        );
        enricher.enrich(Some(&scope), &mut event, &factory);

        assert_eq!(scope.request_id(), Some(1));
        assert_eq!(allocator.last_allocated(), 1);
    }

    #[test]
    fn test_concurrent_requests_get_distinct_ids() {
        let enricher = Arc::new(test_enricher());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let enricher = enricher.clone();
            handles.push(std::thread::spawn(move || {
                let factory = DefaultPropertyFactory::new();
                (0..50)
                    .map(|_| {
                        let scope = RequestContext::new();
                        let mut event = MemoryEvent::new();
                        enricher.enrich(Some(&scope), &mut event, &factory);
                        scope.request_id().unwrap()
                    })
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = std::collections::HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate request id {}", id);
            }
        }
        assert_eq!(seen.len(), 400);
    }

    #[test]
    fn test_custom_property_names() {
        let config = RequestPropertiesConfig {
            request_id_property: "RequestSeq".to_string(),
            session_id_property: "SessionKey".to_string(),
        };
        let enricher =
            RequestPropertiesEnricher::with_config(Arc::new(RequestIdAllocator::new()), config)
                .unwrap();
        let factory = DefaultPropertyFactory::new();
        let scope = test_session_context("abc123");
        let mut event = MemoryEvent::new();

        enricher.enrich(Some(&scope), &mut event, &factory);

        event.assert_property("RequestSeq", PropertyValue::Integer(1));
        event.assert_property("SessionKey", PropertyValue::String("abc123".to_string()));
    }

    #[test]
    fn test_config_validation() {
        let config = RequestPropertiesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_id_property, "HttpRequestId");
        assert_eq!(config.session_id_property, "HttpSessionId");

        let empty = RequestPropertiesConfig {
            request_id_property: "  ".to_string(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let colliding = RequestPropertiesConfig {
            request_id_property: "Correlation".to_string(),
            session_id_property: "Correlation".to_string(),
        };
        let err = RequestPropertiesEnricher::with_config(
            Arc::new(RequestIdAllocator::new()),
            colliding,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Correlation"));
    }

    #[test]
    fn test_enricher_name() {
        let enricher = test_enricher();
        assert_eq!(Enricher::name(&enricher), "RequestPropertiesEnricher");
    }
}
