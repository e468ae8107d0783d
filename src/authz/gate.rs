use super::capability::Capability;
use super::evaluator::has_capability;
use super::role::Role;

/// Declarative content gate: an optional required capability plus an
/// optional set of acceptable roles. All supplied conditions must hold;
/// a gate with no conditions allows everyone.
///
/// The decision itself is [`Gate::allows`], a pure synchronous function;
/// whatever renders the UI wraps it in its own conditional idiom.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    capability: Option<Capability>,
    roles: Option<Vec<Role>>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `capability` of the current role.
    pub fn capability(mut self, capability: Capability) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Restrict to the given roles. An empty list admits no one.
    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    /// Sugar over the general form; must agree with it exactly.
    pub fn superadmin_only() -> Self {
        Self::new().roles([Role::Superadmin])
    }

    pub fn client_admin_only() -> Self {
        Self::new().roles([Role::ClientAdmin])
    }

    /// Either of the two administrative roles.
    pub fn admins_only() -> Self {
        Self::new().roles([Role::Superadmin, Role::ClientAdmin])
    }

    /// Should protected content render for `role`? Conditions compose
    /// with logical AND: a failing capability vetoes even when the role
    /// set matches.
    pub fn allows(&self, role: Role) -> bool {
        if let Some(capability) = self.capability {
            if !has_capability(role, capability) {
                return false;
            }
        }

        if let Some(roles) = &self.roles {
            if !roles.contains(&role) {
                return false;
            }
        }

        true
    }

    /// Pick `content` when the gate allows `role`, `fallback` otherwise.
    pub fn select<T>(&self, role: Role, content: T, fallback: T) -> T {
        if self.allows(role) {
            content
        } else {
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gate_allows_everyone() {
        let gate = Gate::new();
        for role in Role::ALL {
            assert!(gate.allows(role));
        }
    }

    #[test]
    fn capability_failure_vetoes_matching_role_set() {
        // Operator is in the role set but lacks the capability.
        let gate = Gate::new()
            .capability(Capability::UsersManage)
            .roles([Role::Operator]);
        assert!(!gate.allows(Role::Operator));
    }

    #[test]
    fn select_returns_fallback_on_denial() {
        let gate = Gate::superadmin_only();
        assert_eq!(gate.select(Role::Superadmin, "panel", ""), "panel");
        assert_eq!(gate.select(Role::Operator, "panel", ""), "");
    }
}
