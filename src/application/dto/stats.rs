use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentCounts {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
    pub archived: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactCounts {
    pub total: u64,
    pub unread: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub posts: ContentCounts,
    pub portfolio: ContentCounts,
    pub contacts: ContactCounts,
    pub users: u64,
}
