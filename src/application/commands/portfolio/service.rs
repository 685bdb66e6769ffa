use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        content::{Slug, ensure_slug_available},
        portfolio::{PortfolioId, PortfolioReadRepository, PortfolioWriteRepository},
    },
};

pub struct PortfolioCommandService {
    pub(super) write_repo: Arc<dyn PortfolioWriteRepository>,
    pub(super) read_repo: Arc<dyn PortfolioReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PortfolioCommandService {
    pub fn new(
        write_repo: Arc<dyn PortfolioWriteRepository>,
        read_repo: Arc<dyn PortfolioReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugger,
            clock,
        }
    }

    pub(super) async fn ensure_slug_free(
        &self,
        slug: &Slug,
        editing: Option<PortfolioId>,
    ) -> ApplicationResult<()> {
        let owner = self.read_repo.find_by_slug(slug).await?.map(|item| item.id);
        ensure_slug_available(slug, owner, editing)?;
        Ok(())
    }
}
