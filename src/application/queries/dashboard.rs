use std::sync::Arc;

use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, ContactCounts, ContentCounts, DashboardStatsDto},
        error::ApplicationResult,
    },
    domain::{
        contact::{ContactFilter, ContactRepository, ContactStatus},
        content::{ContentFilter, ContentStatus},
        errors::DomainResult,
        pagination::{Page, PageRequest},
        portfolio::PortfolioReadRepository,
        post::PostReadRepository,
        user::{CanEditContent, UserRepository},
    },
};

/// Headline counters for the admin dashboard. Totals come from the paged
/// listings with a single-row window.
pub struct DashboardQueryService {
    post_repo: Arc<dyn PostReadRepository>,
    portfolio_repo: Arc<dyn PortfolioReadRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl DashboardQueryService {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        portfolio_repo: Arc<dyn PortfolioReadRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            post_repo,
            portfolio_repo,
            contact_repo,
            user_repo,
        }
    }

    pub async fn stats(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<DashboardStatsDto> {
        authorize(actor, &CanEditContent, "view dashboard statistics")?;

        let mut posts = ContentCounts::default();
        let mut portfolio = ContentCounts::default();
        for status in [
            None,
            Some(ContentStatus::Published),
            Some(ContentStatus::Draft),
            Some(ContentStatus::Archived),
        ] {
            let filter = counting_filter(status);
            let post_total = total(self.post_repo.list(&filter).await)?;
            let portfolio_total = total(self.portfolio_repo.list(&filter).await)?;
            record(&mut posts, status, post_total);
            record(&mut portfolio, status, portfolio_total);
        }

        let contacts = ContactCounts {
            total: total(self.contact_repo.list(&counting_contacts(None)).await)?,
            unread: total(
                self.contact_repo
                    .list(&counting_contacts(Some(ContactStatus::Unread)))
                    .await,
            )?,
        };
        let users = self.user_repo.count().await?;

        Ok(DashboardStatsDto {
            posts,
            portfolio,
            contacts,
            users,
        })
    }
}

fn counting_filter(status: Option<ContentStatus>) -> ContentFilter {
    ContentFilter::default()
        .with_status(status)
        .with_page(PageRequest::new(Some(1), Some(1)))
}

fn counting_contacts(status: Option<ContactStatus>) -> ContactFilter {
    ContactFilter {
        status,
        search: None,
        page: PageRequest::new(Some(1), Some(1)),
    }
}

fn total<T>(page: DomainResult<Page<T>>) -> DomainResult<u64> {
    page.map(|page| page.total)
}

fn record(counts: &mut ContentCounts, status: Option<ContentStatus>, value: u64) {
    match status {
        None => counts.total = value,
        Some(ContentStatus::Published) => counts.published = value,
        Some(ContentStatus::Draft) => counts.drafts = value,
        Some(ContentStatus::Archived) => counts.archived = value,
    }
}
