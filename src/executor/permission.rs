/// Which permission policy a context currently answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionScope {
    /// Author may only act on itself
    #[default]
    Base,
    /// Admin authors may act on anyone; others still only on themselves
    Elevated,
}

impl PermissionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Elevated => "elevated",
        }
    }
}

/// Permission state for one invocation.
///
/// Both policies are pure functions of the scope, the author's admin flag
/// and two identities. The scope starts at `Base` and may only be raised by
/// a modifier before the command body runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permissions {
    author: String,
    target: String,
    author_is_admin: bool,
    scope: PermissionScope,
}

impl Permissions {
    pub fn new(author: &str, target: &str, author_is_admin: bool) -> Self {
        Self {
            author: author.to_string(),
            target: target.to_string(),
            author_is_admin,
            scope: PermissionScope::Base,
        }
    }

    pub fn scope(&self) -> PermissionScope {
        self.scope
    }

    pub(crate) fn set_scope(&mut self, scope: PermissionScope) {
        self.scope = scope;
    }

    /// Active policy applied to the invocation's own author and target.
    pub fn is_allowed(&self) -> bool {
        self.check(self.scope, &self.author, &self.target)
    }

    /// Active policy applied to two explicit identities.
    pub fn is_allowed_between(&self, author: &str, target: &str) -> bool {
        self.check(self.scope, author, target)
    }

    /// Base policy regardless of the active scope.
    pub fn base_allows(&self, author: &str, target: &str) -> bool {
        self.check(PermissionScope::Base, author, target)
    }

    /// Elevated policy regardless of the active scope.
    pub fn elevated_allows(&self, author: &str, target: &str) -> bool {
        self.check(PermissionScope::Elevated, author, target)
    }

    fn check(&self, scope: PermissionScope, author: &str, target: &str) -> bool {
        match scope {
            PermissionScope::Base => author == target,
            PermissionScope::Elevated => self.author_is_admin || author == target,
        }
    }
}
