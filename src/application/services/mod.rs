// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            contacts::ContactCommandService, portfolio::PortfolioCommandService,
            posts::PostCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            contacts::ContactQueryService, dashboard::DashboardQueryService,
            portfolio::PortfolioQueryService, posts::PostQueryService, users::UserQueryService,
        },
    },
    domain::{
        contact::ContactRepository,
        portfolio::{PortfolioReadRepository, PortfolioWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub portfolio_commands: Arc<PortfolioCommandService>,
    pub portfolio_queries: Arc<PortfolioQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub dashboard: Arc<DashboardQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        portfolio_write_repo: Arc<dyn PortfolioWriteRepository>,
        portfolio_read_repo: Arc<dyn PortfolioReadRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let post_commands = Arc::new(PostCommandService::new(
            post_write_repo,
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let portfolio_commands = Arc::new(PortfolioCommandService::new(
            portfolio_write_repo,
            Arc::clone(&portfolio_read_repo),
            slugger,
            Arc::clone(&clock),
        ));
        let portfolio_queries =
            Arc::new(PortfolioQueryService::new(Arc::clone(&portfolio_read_repo)));

        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&contact_repo),
            clock,
        ));
        let contact_queries = Arc::new(ContactQueryService::new(Arc::clone(&contact_repo)));

        let dashboard = Arc::new(DashboardQueryService::new(
            post_read_repo,
            portfolio_read_repo,
            contact_repo,
            user_repo,
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            portfolio_commands,
            portfolio_queries,
            contact_commands,
            contact_queries,
            dashboard,
            token_manager,
        }
    }

    /// Resolves a raw bearer token into the calling principal.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        tracing::debug!(user_id = %user.id, role = %user.role, "bearer token accepted");
        Ok(user)
    }
}
