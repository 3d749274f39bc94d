pub const PROPERTY_HTTP_REQUEST_ID: &str = "HttpRequestId";
pub const PROPERTY_HTTP_SESSION_ID: &str = "HttpSessionId";

pub const DEFAULT_LOG_LEVEL: &str = "info";
