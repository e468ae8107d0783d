//! The static role registry: a total mapping from every role to an
//! explicit answer for every capability.
//!
//! Totality is enforced by exhaustive `match`, never by a map lookup with
//! a default, so a new capability variant fails to compile until every
//! role has taken a position on it.

use std::collections::BTreeSet;

use super::capability::Capability;
use super::role::Role;

/// Does `role` hold `capability`?
///
/// Immutable for the lifetime of the process; the same inputs always
/// produce the same answer.
pub fn grants(role: Role, capability: Capability) -> bool {
    match role {
        // Superadmin holds every capability, including cross-workspace
        // administration.
        Role::Superadmin => true,

        Role::ClientAdmin => match capability {
            Capability::DashboardView => true,
            Capability::AccountsView => true,
            Capability::AccountsManage => true,
            Capability::SpyNumbersView => true,
            // Spy number provisioning is platform-level.
            Capability::SpyNumbersManage => false,
            Capability::CampaignsView => true,
            Capability::CampaignsCreate => true,
            Capability::CampaignsManage => true,
            Capability::MessagesView => true,
            Capability::MessagesSend => true,
            Capability::EntitiesView => true,
            Capability::EntitiesManage => true,
            Capability::MonitoringView => true,
            Capability::AdminView => true,
            Capability::UsersManage => true,
            Capability::TenantsManage => false,
        },

        Role::Operator => match capability {
            Capability::DashboardView => true,
            Capability::AccountsView => true,
            Capability::AccountsManage => false,
            Capability::SpyNumbersView => false,
            Capability::SpyNumbersManage => false,
            Capability::CampaignsView => true,
            Capability::CampaignsCreate => false,
            Capability::CampaignsManage => false,
            Capability::MessagesView => true,
            Capability::MessagesSend => true,
            Capability::EntitiesView => false,
            Capability::EntitiesManage => false,
            Capability::MonitoringView => false,
            Capability::AdminView => false,
            Capability::UsersManage => false,
            Capability::TenantsManage => false,
        },
    }
}

/// The full flag set for a role, for audit and matrix display.
pub fn capability_set(role: Role) -> CapabilitySet {
    CapabilitySet {
        granted: Capability::ALL
            .iter()
            .copied()
            .filter(|cap| grants(role, *cap))
            .collect(),
    }
}

/// A role's granted capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    granted: BTreeSet<Capability>,
}

impl CapabilitySet {
    pub fn contains(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.granted.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// True when every capability in `other` is also granted here.
    pub fn is_superset_of(&self, other: &CapabilitySet) -> bool {
        self.granted.is_superset(&other.granted)
    }
}
