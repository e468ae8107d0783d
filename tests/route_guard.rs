use anyhow::Result;

use waboard_access::nav::visible_items;
use waboard_access::{can_access_route, Role};

#[test]
fn guarded_routes_follow_the_matrix() -> Result<()> {
    // Superadmin walks every listed destination
    for path in [
        "/",
        "/accounts",
        "/spy-numbers",
        "/campaigns",
        "/messages",
        "/entities",
        "/monitoring",
        "/administration",
    ] {
        assert!(can_access_route(Role::Superadmin, path), "superadmin barred from {path}");
    }

    // Client admin loses nothing but platform-level surfaces stay visible to it
    assert!(can_access_route(Role::ClientAdmin, "/administration"));
    assert!(can_access_route(Role::ClientAdmin, "/spy-numbers"));

    // Operator keeps the day-to-day surfaces only
    assert!(can_access_route(Role::Operator, "/"));
    assert!(can_access_route(Role::Operator, "/messages"));
    assert!(!can_access_route(Role::Operator, "/spy-numbers"));
    assert!(!can_access_route(Role::Operator, "/monitoring"));
    assert!(!can_access_route(Role::Operator, "/administration"));

    Ok(())
}

#[test]
fn unlisted_routes_are_open() -> Result<()> {
    for role in Role::ALL {
        assert!(can_access_route(role, "/some/unregistered/path"));
        assert!(can_access_route(role, ""));
    }

    Ok(())
}

#[test]
fn matching_is_exact_not_prefix() -> Result<()> {
    // A nested path under a gated destination is not in the table, so the
    // permissive default applies even where the parent is denied.
    assert!(!can_access_route(Role::Operator, "/administration"));
    assert!(can_access_route(Role::Operator, "/administration/users"));

    Ok(())
}

#[test]
fn menu_mirrors_route_access() -> Result<()> {
    for role in Role::ALL {
        for item in visible_items(role) {
            assert!(can_access_route(role, item.path), "{role} shown hidden entry {}", item.path);
        }
    }

    Ok(())
}
