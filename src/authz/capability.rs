use std::fmt;

/// Resource areas of the console. Grouping is presentational only and
/// carries no runtime semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceArea {
    Dashboard,
    Accounts,
    SpyNumbers,
    Campaigns,
    Messages,
    Entities,
    Monitoring,
    Administration,
}

impl ResourceArea {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceArea::Dashboard => "dashboard",
            ResourceArea::Accounts => "accounts",
            ResourceArea::SpyNumbers => "spy_numbers",
            ResourceArea::Campaigns => "campaigns",
            ResourceArea::Messages => "messages",
            ResourceArea::Entities => "entities",
            ResourceArea::Monitoring => "monitoring",
            ResourceArea::Administration => "administration",
        }
    }
}

impl fmt::Display for ResourceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named boolean capability. The set is closed: adding or removing a
/// variant forces every exhaustive match over it to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    DashboardView,
    AccountsView,
    AccountsManage,
    SpyNumbersView,
    SpyNumbersManage,
    CampaignsView,
    CampaignsCreate,
    CampaignsManage,
    MessagesView,
    MessagesSend,
    EntitiesView,
    EntitiesManage,
    MonitoringView,
    AdminView,
    UsersManage,
    TenantsManage,
}

impl Capability {
    /// Every capability, in matrix display order.
    pub const ALL: [Capability; 16] = [
        Capability::DashboardView,
        Capability::AccountsView,
        Capability::AccountsManage,
        Capability::SpyNumbersView,
        Capability::SpyNumbersManage,
        Capability::CampaignsView,
        Capability::CampaignsCreate,
        Capability::CampaignsManage,
        Capability::MessagesView,
        Capability::MessagesSend,
        Capability::EntitiesView,
        Capability::EntitiesManage,
        Capability::MonitoringView,
        Capability::AdminView,
        Capability::UsersManage,
        Capability::TenantsManage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::DashboardView => "dashboard.view",
            Capability::AccountsView => "accounts.view",
            Capability::AccountsManage => "accounts.manage",
            Capability::SpyNumbersView => "spy_numbers.view",
            Capability::SpyNumbersManage => "spy_numbers.manage",
            Capability::CampaignsView => "campaigns.view",
            Capability::CampaignsCreate => "campaigns.create",
            Capability::CampaignsManage => "campaigns.manage",
            Capability::MessagesView => "messages.view",
            Capability::MessagesSend => "messages.send",
            Capability::EntitiesView => "entities.view",
            Capability::EntitiesManage => "entities.manage",
            Capability::MonitoringView => "monitoring.view",
            Capability::AdminView => "admin.view",
            Capability::UsersManage => "users.manage",
            Capability::TenantsManage => "tenants.manage",
        }
    }

    /// Parse a capability name. Returns `None` for anything outside the
    /// closed schema; callers on render paths treat that as a denial.
    pub fn parse(name: &str) -> Option<Capability> {
        Capability::ALL.iter().copied().find(|cap| cap.as_str() == name)
    }

    pub fn area(self) -> ResourceArea {
        match self {
            Capability::DashboardView => ResourceArea::Dashboard,
            Capability::AccountsView | Capability::AccountsManage => ResourceArea::Accounts,
            Capability::SpyNumbersView | Capability::SpyNumbersManage => ResourceArea::SpyNumbers,
            Capability::CampaignsView | Capability::CampaignsCreate | Capability::CampaignsManage => {
                ResourceArea::Campaigns
            }
            Capability::MessagesView | Capability::MessagesSend => ResourceArea::Messages,
            Capability::EntitiesView | Capability::EntitiesManage => ResourceArea::Entities,
            Capability::MonitoringView => ResourceArea::Monitoring,
            Capability::AdminView | Capability::UsersManage | Capability::TenantsManage => {
                ResourceArea::Administration
            }
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
