use std::fmt;

/// Closed role enumeration. There is no hierarchy between roles: each one
/// gets an independent, exhaustive capability assignment in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Full platform access across all client workspaces.
    Superadmin,
    /// Administers a single client workspace.
    ClientAdmin,
    /// Day-to-day messaging operator with read-mostly access.
    Operator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Superadmin, Role::ClientAdmin, Role::Operator];

    /// The role every ambiguous input degrades to.
    pub const MOST_RESTRICTIVE: Role = Role::Operator;

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::ClientAdmin => "client_admin",
            Role::Operator => "operator",
        }
    }

    /// Parse a current role name. Legacy aliases are not accepted here;
    /// see [`Role::from_stored`] for the storage-facing variant.
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "superadmin" => Some(Role::Superadmin),
            "client_admin" => Some(Role::ClientAdmin),
            "operator" => Some(Role::Operator),
            _ => None,
        }
    }

    /// Parse a role name as found in persisted sessions. Accepts the
    /// legacy `"admin"` alias that older sessions stored for client
    /// administrators; everything else unknown stays unknown and forces
    /// re-authentication upstream.
    pub fn from_stored(name: &str) -> Option<Role> {
        match name {
            "admin" => Some(Role::ClientAdmin),
            other => Role::from_name(other),
        }
    }

    pub fn descriptor(self) -> &'static RoleDescriptor {
        match self {
            Role::Superadmin => &RoleDescriptor {
                label: "Super Admin",
                description: "Full platform access across all client workspaces",
                emphasis: Emphasis::Critical,
            },
            Role::ClientAdmin => &RoleDescriptor {
                label: "Client Admin",
                description: "Administers users and settings of one client workspace",
                emphasis: Emphasis::Elevated,
            },
            Role::Operator => &RoleDescriptor {
                label: "Operator",
                description: "Handles day-to-day messaging with read-mostly access",
                emphasis: Emphasis::Neutral,
            },
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation-only metadata for a role: derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDescriptor {
    pub label: &'static str,
    pub description: &'static str,
    pub emphasis: Emphasis,
}

/// Visual emphasis tag the UI attaches to a role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Neutral,
    Elevated,
    Critical,
}
