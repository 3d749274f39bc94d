//! Process-wide request ID allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free allocator of per-request sequence numbers.
///
/// Constructed once at process startup and shared (via `Arc`) with every
/// enricher that needs request IDs. The counter starts at 0, so the first
/// allocated ID is 1. IDs are unique and monotonically increasing for the
/// lifetime of the allocator; the counter is never reset or persisted.
#[derive(Debug, Default)]
pub struct RequestIdAllocator {
    next: AtomicU64,
}

impl RequestIdAllocator {
    /// Create an allocator with the counter at 0.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next request ID.
    pub fn allocate(&self) -> u64 {
        let id = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(request_id = id, "allocated request id");
        id
    }

    /// The most recently allocated ID, or 0 if none have been allocated.
    pub fn last_allocated(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}
