pub mod roster;

use crate::core::Result;
use roster::AdminRoster;
use std::sync::Arc;
use tracing::{Level, event};

/// Host-side identity of the caller issuing a script line.
pub trait Session: Send + Sync {
    /// Acting identity
    fn author(&self) -> &str;

    /// Whether the acting identity is an admin
    fn is_admin(&self) -> bool;

    /// Whether an arbitrary identity is an admin
    fn is_user_admin(&self, identity: &str) -> bool;
}

/// Session backed by a shared [`AdminRoster`]
///
/// The author's admin flag is captured when the session is opened; lookups
/// for other identities go to the roster every time.
#[derive(Clone)]
pub struct HostSession {
    author: String,
    is_admin: bool,
    roster: Arc<AdminRoster>,
}

impl HostSession {
    pub fn open(author: &str, roster: Arc<AdminRoster>) -> Result<Self> {
        let is_admin = roster.contains(author)?;
        Ok(Self {
            author: author.to_string(),
            is_admin,
            roster,
        })
    }

    /// Opens a session against the process-wide roster
    pub fn open_global(author: &str) -> Result<Self> {
        Self::open(author, Arc::clone(AdminRoster::global()))
    }
}

impl Session for HostSession {
    fn author(&self) -> &str {
        &self.author
    }

    fn is_admin(&self) -> bool {
        self.is_admin
    }

    fn is_user_admin(&self, identity: &str) -> bool {
        match self.roster.contains(identity) {
            Ok(admin) => admin,
            Err(err) => {
                event!(Level::WARN, error = %err, identity, "admin roster lookup failed");
                false
            }
        }
    }
}
