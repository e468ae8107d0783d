use super::capability::Capability;
use super::registry::{self, CapabilitySet};
use super::role::{Role, RoleDescriptor};

/// Policy evaluator trait for pluggable authorization logic.
///
/// Resolution is a pure function of (role, capability): synchronous,
/// side-effect free, safe to call from render paths.
pub trait PolicyEvaluator {
    fn can(&self, role: Role, capability: Capability) -> bool;
}

/// Default evaluator backed by the static role registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryPolicy;

impl RegistryPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl PolicyEvaluator for RegistryPolicy {
    fn can(&self, role: Role, capability: Capability) -> bool {
        let allowed = registry::grants(role, capability);
        if !allowed {
            tracing::debug!(
                role = %role,
                capability = %capability,
                "capability denied"
            );
        }
        allowed
    }
}

/// Does `role` hold `capability`?
pub fn has_capability(role: Role, capability: Capability) -> bool {
    RegistryPolicy.can(role, capability)
}

/// String-facing check for the UI boundary, where role and capability
/// arrive as plain strings. Must never panic:
/// - an unknown role name degrades to the most restrictive role;
/// - an unknown capability name resolves to `false`.
pub fn has_capability_named(role_name: &str, capability_name: &str) -> bool {
    let role = match Role::from_stored(role_name) {
        Some(role) => role,
        None => {
            tracing::debug!(role = %role_name, "unknown role, degrading to most restrictive");
            Role::MOST_RESTRICTIVE
        }
    };

    match Capability::parse(capability_name) {
        Some(capability) => has_capability(role, capability),
        None => {
            tracing::debug!(capability = %capability_name, "unknown capability, failing closed");
            false
        }
    }
}

/// The full flag set for a role, for audit/debug/matrix display.
pub fn all_capabilities(role: Role) -> CapabilitySet {
    registry::capability_set(role)
}

/// Static presentation metadata for a role.
pub fn describe_role(role: Role) -> &'static RoleDescriptor {
    role.descriptor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superadmin_holds_everything() {
        for cap in Capability::ALL {
            assert!(has_capability(Role::Superadmin, cap), "{cap}");
        }
    }

    #[test]
    fn operator_cannot_manage_users() {
        assert!(!has_capability(Role::Operator, Capability::UsersManage));
        assert!(has_capability(Role::Superadmin, Capability::UsersManage));
    }

    #[test]
    fn unknown_capability_fails_closed() {
        assert!(!has_capability_named("superadmin", "doesNotExist"));
    }

    #[test]
    fn unknown_role_degrades_to_operator() {
        assert!(has_capability_named("intruder", "dashboard.view"));
        assert!(!has_capability_named("intruder", "users.manage"));
    }

    #[test]
    fn named_check_accepts_legacy_alias() {
        assert!(has_capability_named("admin", "users.manage"));
    }

    #[test]
    fn repeated_checks_are_stable() {
        let first = has_capability(Role::ClientAdmin, Capability::SpyNumbersManage);
        for _ in 0..100 {
            assert_eq!(has_capability(Role::ClientAdmin, Capability::SpyNumbersManage), first);
        }
    }
}
