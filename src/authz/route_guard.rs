//! Route guard: maps navigation destinations to the single capability
//! required to view them.
//!
//! Paths are matched by exact equality; nested routes under a gated path
//! are not covered. Paths absent from the table are allowed. Both are
//! policy for this cosmetic client-side gate; tightening either is a
//! behavior change.

use super::capability::Capability;
use super::evaluator::has_capability;
use super::role::Role;

const GUARDED_ROUTES: &[(&str, Capability)] = &[
    ("/", Capability::DashboardView),
    ("/accounts", Capability::AccountsView),
    ("/spy-numbers", Capability::SpyNumbersView),
    ("/campaigns", Capability::CampaignsView),
    ("/messages", Capability::MessagesView),
    ("/entities", Capability::EntitiesView),
    ("/monitoring", Capability::MonitoringView),
    ("/administration", Capability::AdminView),
];

/// The capability gating `path`, if the path is listed.
pub fn required_capability(path: &str) -> Option<Capability> {
    GUARDED_ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, capability)| *capability)
}

/// May `role` view the destination at `path`?
pub fn can_access_route(role: Role, path: &str) -> bool {
    match required_capability(path) {
        Some(capability) => {
            let allowed = has_capability(role, capability);
            if !allowed {
                tracing::debug!(role = %role, path = %path, "route denied");
            }
            allowed
        }
        None => true,
    }
}
