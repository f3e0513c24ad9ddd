use crate::errors::CoreError;
use crate::models::signup::EmailSignup;

/// Storage seam for captured signup emails.
///
/// The hosted deployment keeps these in a document database; the core only
/// relies on this contract: uniqueness on the (already normalized) email
/// and newest-first listing.
pub trait SignupStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Insert a signup. Fails with `CoreError::DuplicateEmail` if the
    /// address is already present.
    fn insert(&mut self, signup: EmailSignup) -> Result<(), CoreError>;

    /// All signups, newest first.
    fn list(&self) -> Result<Vec<EmailSignup>, CoreError>;

    /// Whether `email` (normalized) has already signed up.
    fn contains(&self, email: &str) -> Result<bool, CoreError>;
}
