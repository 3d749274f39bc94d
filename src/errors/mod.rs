pub mod enrich_error;

pub use enrich_error::{EnrichError, EnrichResult};
