//! Assertion helpers for enrichment tests

use crate::event::PropertyValue;
use crate::testing::fixtures::MemoryEvent;

/// Assertions over the properties an event accumulated
pub trait EventAssertions {
    /// Assert the event carries the property with exactly this value
    fn assert_property(&self, name: &str, expected: PropertyValue);

    /// Assert no property with this name exists on the event
    fn assert_no_property(&self, name: &str);

    /// Assert the total number of properties on the event
    fn assert_property_count(&self, expected: usize);
}

impl EventAssertions for MemoryEvent {
    fn assert_property(&self, name: &str, expected: PropertyValue) {
        match self.property(name) {
            Some(value) => assert_eq!(
                value, &expected,
                "property '{}' has value {:?}, expected {:?}",
                name, value, expected
            ),
            None => panic!("expected property '{}' on event, found none", name),
        }
    }

    fn assert_no_property(&self, name: &str) {
        assert!(
            self.property(name).is_none(),
            "expected no property '{}' on event, found {:?}",
            name,
            self.property(name)
        );
    }

    fn assert_property_count(&self, expected: usize) {
        assert_eq!(
            self.properties().len(),
            expected,
            "event has {} properties, expected {}: {:?}",
            self.properties().len(),
            expected,
            self.properties()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{LogEvent, LogProperty};

    #[test]
    fn test_assertions_pass_on_matching_event() {
        let mut event = MemoryEvent::new();
        event.add_property_if_absent(LogProperty::new("HttpRequestId", 5u64));

        event.assert_property("HttpRequestId", PropertyValue::Integer(5));
        event.assert_no_property("HttpSessionId");
        event.assert_property_count(1);
    }

    #[test]
    #[should_panic(expected = "expected property")]
    fn test_missing_property_panics() {
        let event = MemoryEvent::new();
        event.assert_property("HttpRequestId", PropertyValue::Integer(1));
    }
}
