//! # Request Context
//!
//! Explicit per-request state for enrichment: a typed, once-settable
//! request-ID slot, an optional session handle, and the process-wide
//! allocator the IDs come from.

pub mod allocator;
pub mod request;

pub use allocator::RequestIdAllocator;
pub use request::{RequestContext, Session};
