use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::CoreError;
use crate::models::signup::EmailSignup;
use crate::stores::memory::InMemorySignupStore;
use crate::stores::traits::SignupStore;

/// Captures beta-signup emails through a [`SignupStore`].
///
/// Addresses are trimmed and lowercased before they are checked or stored,
/// so "Jo@Campus.EDU " and "jo@campus.edu" are the same signup.
pub struct SignupService {
    store: Box<dyn SignupStore>,
}

impl SignupService {
    pub fn new(store: Box<dyn SignupStore>) -> Self {
        Self { store }
    }

    /// Service backed by an [`InMemorySignupStore`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemorySignupStore::new()))
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Validate and store an email, timestamped now.
    pub fn submit(
        &mut self,
        email: &str,
        required_suffix: Option<&str>,
    ) -> Result<EmailSignup, CoreError> {
        self.submit_at(email, required_suffix, Utc::now())
    }

    /// Validate and store an email with an explicit timestamp.
    pub fn submit_at(
        &mut self,
        email: &str,
        required_suffix: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> Result<EmailSignup, CoreError> {
        let normalized = normalize_email(email, required_suffix)?;
        if self.store.contains(&normalized)? {
            tracing::warn!(email = %normalized, "duplicate signup rejected");
            return Err(CoreError::DuplicateEmail(normalized));
        }

        let signup = EmailSignup::new(normalized, timestamp);
        self.store.insert(signup.clone())?;
        tracing::info!(email = %signup.email, store = self.store.name(), "signup captured");
        Ok(signup)
    }

    /// All signups, newest first.
    pub fn list(&self) -> Result<Vec<EmailSignup>, CoreError> {
        self.store.list()
    }

    /// CSV export for the admin view: `email,timestamp` header, newest first,
    /// RFC 3339 UTC timestamps.
    pub fn export_csv(&self) -> Result<String, CoreError> {
        let mut csv = String::from("email,timestamp\n");
        for signup in self.store.list()? {
            csv.push_str(&signup.email);
            csv.push(',');
            csv.push_str(&signup.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
            csv.push('\n');
        }
        Ok(csv)
    }
}

impl std::fmt::Debug for SignupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupService")
            .field("store", &self.store.name())
            .finish()
    }
}

/// Trim, lowercase, and check the address shape (`local@domain.tld`) plus
/// the optional domain suffix.
pub fn normalize_email(email: &str, required_suffix: Option<&str>) -> Result<String, CoreError> {
    let normalized = email.trim().to_lowercase();
    let invalid = |reason: &str| CoreError::InvalidEmail(format!("'{}': {reason}", email.trim()));

    if normalized.is_empty() {
        return Err(invalid("address is empty"));
    }
    if normalized
        .chars()
        .any(|c| c.is_whitespace() || c == ',' || c == '"')
    {
        return Err(invalid("address contains whitespace, commas, or quotes"));
    }

    let (local, domain) = normalized
        .split_once('@')
        .ok_or_else(|| invalid("missing '@'"))?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid("expected exactly one '@' after a non-empty name"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must look like 'school.edu'"));
    }

    if let Some(suffix) = required_suffix {
        let suffix = suffix.trim().to_lowercase();
        if !suffix.is_empty() && !domain.ends_with(&suffix) {
            return Err(invalid(&format!("please use a {suffix} email address")));
        }
    }

    Ok(normalized)
}
