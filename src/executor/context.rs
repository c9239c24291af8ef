use super::permission::{PermissionScope, Permissions};
use super::registry::Registry;
use crate::config::EngineConfig;
use crate::parser::{Arguments, Invocation};
use crate::session::Session;
use crate::storage::Stores;

/// Everything a command body can see for one invocation.
///
/// Owned by the dispatcher for the duration of a single `run`. After a
/// modifier has run, the only state that may have changed is the
/// permission scope.
pub struct ExecutionContext<'a> {
    invocation: Invocation,
    args: Arguments,
    permissions: Permissions,
    is_target_admin: bool,
    session: &'a dyn Session,
    stores: &'a Stores,
    config: &'a EngineConfig,
    registry: &'a Registry,
}

impl<'a> ExecutionContext<'a> {
    pub fn build(
        session: &'a dyn Session,
        invocation: Invocation,
        stores: &'a Stores,
        config: &'a EngineConfig,
        registry: &'a Registry,
    ) -> Self {
        let args = Arguments::from_tail(&invocation.arg_tail);
        let permissions = Permissions::new(session.author(), &invocation.target, session.is_admin());
        let is_target_admin = session.is_user_admin(&invocation.target);

        Self {
            invocation,
            args,
            permissions,
            is_target_admin,
            session,
            stores,
            config,
            registry,
        }
    }

    /// Acting identity
    pub fn author(&self) -> &str {
        self.session.author()
    }

    /// Resolved target identity
    pub fn target(&self) -> &str {
        &self.invocation.target
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn args(&self) -> &Arguments {
        &self.args
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    /// Active policy for the invocation's author and target
    pub fn is_allowed(&self) -> bool {
        self.permissions.is_allowed()
    }

    pub fn is_author_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn is_target_admin(&self) -> bool {
        self.is_target_admin
    }

    pub fn session(&self) -> &dyn Session {
        self.session
    }

    pub fn stores(&self) -> &Stores {
        self.stores
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Switches to the elevated policy. Called by modifiers only.
    pub fn elevate(&mut self) {
        self.permissions.set_scope(PermissionScope::Elevated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::session::{HostSession, roster::AdminRoster};
    use std::sync::Arc;

    fn session(author: &str) -> HostSession {
        let roster = Arc::new(AdminRoster::with_admins(["root"]));
        HostSession::open(author, roster).unwrap()
    }

    #[test]
    fn test_build_resolves_target_and_args() {
        let session = session("ada");
        let stores = Stores::in_memory();
        let config = EngineConfig::default();
        let registry = Registry::new();

        let invocation = parser::parse("uget::self profile name --json", "ada", "self").unwrap();
        let ctx = ExecutionContext::build(&session, invocation, &stores, &config, &registry);

        assert_eq!(ctx.author(), "ada");
        assert_eq!(ctx.target(), "ada");
        assert_eq!(ctx.args().positional(), ["profile", "name"]);
        assert!(ctx.args().has_flag("json"));
        assert!(ctx.is_allowed());
        assert!(!ctx.is_author_admin());
        assert!(!ctx.is_target_admin());
    }

    #[test]
    fn test_target_admin_flag_and_elevation() {
        let session = session("root");
        let stores = Stores::in_memory();
        let config = EngineConfig::default();
        let registry = Registry::new();

        let invocation = parser::parse("uget::ada all", "root", "self").unwrap();
        let mut ctx = ExecutionContext::build(&session, invocation, &stores, &config, &registry);

        assert!(ctx.is_author_admin());
        assert!(!ctx.is_target_admin());
        assert!(!ctx.is_allowed());

        ctx.elevate();
        assert_eq!(ctx.permissions().scope(), PermissionScope::Elevated);
        assert!(ctx.is_allowed());
    }
}
