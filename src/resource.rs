use std::fmt;

/// One logical unit of dashboard data.
///
/// The first six variants are the dashboard slices loaded by the
/// coordinator; `Settings` is fetched on its own by the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Cards,
    Transactions,
    WeeklyActivity,
    ExpenseStatistics,
    QuickTransferUsers,
    BalanceHistory,
    Settings,
}

/// The six resources the dashboard coordinator loads, in declaration order.
/// The order carries no meaning; loads are unordered.
pub const DASHBOARD_RESOURCES: [ResourceKey; 6] = [
    ResourceKey::Cards,
    ResourceKey::Transactions,
    ResourceKey::WeeklyActivity,
    ResourceKey::ExpenseStatistics,
    ResourceKey::QuickTransferUsers,
    ResourceKey::BalanceHistory,
];

impl ResourceKey {
    /// URL segment for this resource, as used in the route table.
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKey::Cards => "cards",
            ResourceKey::Transactions => "transactions",
            ResourceKey::WeeklyActivity => "weekly-activity",
            ResourceKey::ExpenseStatistics => "expense-statistics",
            ResourceKey::QuickTransferUsers => "quick-transfer-users",
            ResourceKey::BalanceHistory => "balance-history",
            ResourceKey::Settings => "settings",
        }
    }

    /// Conventionally-derived request path: `/api/` + slug.
    pub fn path(&self) -> String {
        format!("/api/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "cards" => Some(ResourceKey::Cards),
            "transactions" => Some(ResourceKey::Transactions),
            "weekly-activity" => Some(ResourceKey::WeeklyActivity),
            "expense-statistics" => Some(ResourceKey::ExpenseStatistics),
            "quick-transfer-users" => Some(ResourceKey::QuickTransferUsers),
            "balance-history" => Some(ResourceKey::BalanceHistory),
            "settings" => Some(ResourceKey::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKey {
    /// Human-readable name, used in error messages
    /// ("Failed to fetch weekly activity data").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKey::Cards => "cards",
            ResourceKey::Transactions => "transactions",
            ResourceKey::WeeklyActivity => "weekly activity",
            ResourceKey::ExpenseStatistics => "expense statistics",
            ResourceKey::QuickTransferUsers => "quick transfer users",
            ResourceKey::BalanceHistory => "balance history",
            ResourceKey::Settings => "settings",
        };
        write!(f, "{}", name)
    }
}
