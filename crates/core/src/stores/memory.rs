use std::collections::HashSet;

use super::traits::SignupStore;
use crate::errors::CoreError;
use crate::models::signup::EmailSignup;

/// Process-local signup store. Used by default and in tests.
#[derive(Debug, Default)]
pub struct InMemorySignupStore {
    signups: Vec<EmailSignup>,
    emails: HashSet<String>,
}

impl InMemorySignupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.signups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signups.is_empty()
    }
}

impl SignupStore for InMemorySignupStore {
    fn name(&self) -> &str {
        "InMemory"
    }

    fn insert(&mut self, signup: EmailSignup) -> Result<(), CoreError> {
        if !self.emails.insert(signup.email.clone()) {
            return Err(CoreError::DuplicateEmail(signup.email));
        }
        self.signups.push(signup);
        Ok(())
    }

    fn list(&self) -> Result<Vec<EmailSignup>, CoreError> {
        let mut all = self.signups.clone();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }

    fn contains(&self, email: &str) -> Result<bool, CoreError> {
        Ok(self.emails.contains(email))
    }
}
