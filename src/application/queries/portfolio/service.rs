use std::sync::Arc;

use crate::domain::portfolio::PortfolioReadRepository;

pub struct PortfolioQueryService {
    pub(super) read_repo: Arc<dyn PortfolioReadRepository>,
}

impl PortfolioQueryService {
    pub fn new(read_repo: Arc<dyn PortfolioReadRepository>) -> Self {
        Self { read_repo }
    }
}
