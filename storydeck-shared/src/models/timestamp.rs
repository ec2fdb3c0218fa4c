use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transparent wrapper around a UTC timestamp so wire types stay `Eq`-friendly
/// and render sites can reach the inner value as `.0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}
