use serde::{Deserialize, Serialize};

/// Outcome of a successful create call (HTTP 201).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwishResponse {
    /// Absolute URL of the created payment request or refund.
    pub location: Option<String>,
    /// Reserved; the API currently never returns one.
    pub token: Option<String>,
    pub id: Option<String>,
}

impl SwishResponse {
    pub fn new(location: Option<String>, token: Option<String>) -> Self {
        let id = location.as_deref().and_then(resource_id);
        Self { location, token, id }
    }
}

/// Last path segment of a resource location.
pub fn resource_id(location: &str) -> Option<String> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
