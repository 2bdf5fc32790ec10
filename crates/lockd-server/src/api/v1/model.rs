//! Request models for the V1 lock API

use serde::Deserialize;

/// Request parameters for the lock endpoint
///
/// Parameters arrive as text, either in the query string (GET) or in a
/// form-encoded body (POST). Presence checks and numeric conversion
/// happen in the handler so that missing and malformed values produce
/// the exact client-facing messages.
#[derive(Debug, Clone, Deserialize)]
pub struct LockParam {
    /// Name of the lock row
    #[serde(default)]
    pub key: Option<String>,
    /// Requesting owner, recorded on grant
    #[serde(default)]
    pub owner: Option<String>,
    /// Hold duration in decimal seconds; ignored when unlock is present
    #[serde(default)]
    pub duration: Option<String>,
    /// Capability token returned by a previous grant
    #[serde(default)]
    pub unlock: Option<String>,
}
