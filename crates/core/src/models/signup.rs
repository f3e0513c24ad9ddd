use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A beta-signup email captured from the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSignup {
    pub id: Uuid,

    /// Normalized (trimmed, lowercased) address
    pub email: String,

    pub timestamp: DateTime<Utc>,
}

impl EmailSignup {
    pub fn new(email: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            timestamp,
        }
    }
}
