use anyhow::Result;

use waboard_access::{Capability, Gate, Role};

#[test]
fn conditions_compose_with_and() -> Result<()> {
    // Capability false for the role + role set that DOES include it:
    // the capability failure alone vetoes.
    let gate = Gate::new()
        .capability(Capability::UsersManage)
        .roles([Role::Operator, Role::ClientAdmin]);
    assert!(!gate.allows(Role::Operator));
    assert!(gate.allows(Role::ClientAdmin));

    // Role-set failure vetoes a satisfied capability just the same
    let gate = Gate::new()
        .capability(Capability::DashboardView)
        .roles([Role::Superadmin]);
    assert!(!gate.allows(Role::Operator));

    Ok(())
}

#[test]
fn missing_conditions_do_not_restrict() -> Result<()> {
    let open = Gate::new();
    for role in Role::ALL {
        assert!(open.allows(role));
    }

    let capability_only = Gate::new().capability(Capability::MessagesSend);
    assert!(capability_only.allows(Role::Operator));

    let empty_role_set = Gate::new().roles([]);
    for role in Role::ALL {
        assert!(!empty_role_set.allows(role), "{role} admitted by empty role set");
    }

    Ok(())
}

#[test]
fn sugar_agrees_with_the_general_form() -> Result<()> {
    let pairs = [
        (Gate::superadmin_only(), Gate::new().roles([Role::Superadmin])),
        (Gate::client_admin_only(), Gate::new().roles([Role::ClientAdmin])),
        (
            Gate::admins_only(),
            Gate::new().roles([Role::Superadmin, Role::ClientAdmin]),
        ),
    ];

    for (sugar, general) in pairs {
        for role in Role::ALL {
            assert_eq!(sugar.allows(role), general.allows(role), "{role}");
        }
    }

    Ok(())
}

#[test]
fn select_falls_back_on_denial() -> Result<()> {
    let gate = Gate::admins_only();
    assert_eq!(gate.select(Role::ClientAdmin, "panel", "placeholder"), "panel");
    assert_eq!(gate.select(Role::Operator, "panel", "placeholder"), "placeholder");

    Ok(())
}
