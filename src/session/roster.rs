use crate::core::{Result, ScriptError};
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Set of identities the host treats as administrators
///
/// Queries are synchronous so they can back the `Session` admin checks.
pub struct AdminRoster {
    admins: RwLock<HashSet<String>>,
}

// Global roster shared by every session of the process
lazy_static! {
    static ref GLOBAL_ROSTER: Arc<AdminRoster> = Arc::new(AdminRoster::new());
}

impl AdminRoster {
    /// Get the global roster instance
    pub fn global() -> &'static Arc<AdminRoster> {
        &GLOBAL_ROSTER
    }

    const MAX_IDENTITY_LEN: usize = 128;

    /// Creates an empty roster
    pub fn new() -> Self {
        Self {
            admins: RwLock::new(HashSet::new()),
        }
    }

    /// Creates a roster seeded with the given administrators
    pub fn with_admins<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admins: RwLock::new(admins.into_iter().map(Into::into).collect()),
        }
    }

    /// Grants admin status. Returns false if the identity already had it.
    pub fn grant(&self, identity: &str) -> Result<bool> {
        Self::validate_identity(identity)?;

        let mut admins = self.admins.write()?;
        Ok(admins.insert(identity.to_string()))
    }

    /// Revokes admin status
    pub fn revoke(&self, identity: &str) -> Result<()> {
        let mut admins = self.admins.write()?;

        if !admins.contains(identity) {
            return Err(ScriptError::Execution(format!(
                "Identity '{}' is not an admin",
                identity
            )));
        }

        if admins.len() <= 1 {
            return Err(ScriptError::Execution(
                "Cannot revoke the last admin".into(),
            ));
        }

        admins.remove(identity);
        Ok(())
    }

    /// Checks if an identity is an admin
    pub fn contains(&self, identity: &str) -> Result<bool> {
        let admins = self.admins.read()?;
        Ok(admins.contains(identity))
    }

    /// Returns the sorted admin list
    pub fn list(&self) -> Result<Vec<String>> {
        let admins = self.admins.read()?;

        let mut list: Vec<String> = admins.iter().cloned().collect();
        list.sort();

        Ok(list)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.admins.read()?.len())
    }

    fn validate_identity(identity: &str) -> Result<()> {
        if identity.trim().is_empty() {
            return Err(ScriptError::Execution("Identity cannot be empty".into()));
        }

        if identity.len() > Self::MAX_IDENTITY_LEN {
            return Err(ScriptError::Execution(format!(
                "Identity too long (max {} characters)",
                Self::MAX_IDENTITY_LEN
            )));
        }

        if identity.contains(char::is_whitespace) {
            return Err(ScriptError::Execution(
                "Identity cannot contain whitespace".into(),
            ));
        }

        Ok(())
    }
}

impl Default for AdminRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_contains() {
        let roster = AdminRoster::new();
        assert!(!roster.contains("alice").unwrap());

        assert!(roster.grant("alice").unwrap());
        assert!(!roster.grant("alice").unwrap());
        assert!(roster.contains("alice").unwrap());
    }

    #[test]
    fn test_revoke() {
        let roster = AdminRoster::with_admins(["alice", "bob"]);

        roster.revoke("bob").unwrap();
        assert!(!roster.contains("bob").unwrap());
        assert_eq!(roster.len().unwrap(), 1);
    }

    #[test]
    fn test_cannot_revoke_last_admin() {
        let roster = AdminRoster::with_admins(["alice"]);
        assert!(roster.revoke("alice").is_err());
        assert!(roster.contains("alice").unwrap());
    }

    #[test]
    fn test_revoke_unknown_identity() {
        let roster = AdminRoster::with_admins(["alice", "bob"]);
        assert!(roster.revoke("carol").is_err());
    }

    #[test]
    fn test_list_is_sorted() {
        let roster = AdminRoster::with_admins(["zed", "amy", "kim"]);
        assert_eq!(roster.list().unwrap(), vec!["amy", "kim", "zed"]);
    }

    #[test]
    fn test_validate_identity() {
        let roster = AdminRoster::new();

        assert!(roster.grant("").is_err());
        assert!(roster.grant("two words").is_err());

        let long_id = "a".repeat(129);
        assert!(roster.grant(&long_id).is_err());
    }
}
