use crate::authz::Role;

/// A hardcoded demo account. Passwords are demo values compared in
/// plaintext; there is no real authentication behind this table.
#[derive(Debug, Clone, Copy)]
pub struct DemoUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub tenant: Option<&'static str>,
}

pub const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: "6f1c2a4e-9b3d-4e8f-8a21-5c7d90e1b234",
        name: "Platform Root",
        email: "root@waboard.io",
        password: "super123",
        role: Role::Superadmin,
        tenant: None,
    },
    DemoUser {
        id: "b2d84f60-17ac-4c5b-9e02-dd4a6b8c3f19",
        name: "Acme Admin",
        email: "admin@acme.io",
        password: "admin123",
        role: Role::ClientAdmin,
        tenant: Some("acme"),
    },
    DemoUser {
        id: "0a9e3c71-52fb-46d8-b1c4-7e8f2d6a5b90",
        name: "Acme Agent",
        email: "agent@acme.io",
        password: "agent123",
        role: Role::Operator,
        tenant: Some("acme"),
    },
];

/// Look up a credential pair. `None` means invalid credentials; the
/// caller decides how to surface that.
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoUser> {
    DEMO_USERS
        .iter()
        .find(|user| user.email == email && user.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pair_authenticates() {
        let user = authenticate("admin@acme.io", "admin123").expect("demo admin");
        assert_eq!(user.role, Role::ClientAdmin);
        assert_eq!(user.tenant, Some("acme"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(authenticate("admin@acme.io", "nope").is_none());
        assert!(authenticate("ghost@acme.io", "admin123").is_none());
    }
}
