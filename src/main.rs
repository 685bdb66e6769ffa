// src/main.rs
use agency_cms::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use agency_cms::config::AppConfig;
use agency_cms::domain::{
    contact::ContactRepository,
    portfolio::{PortfolioReadRepository, PortfolioWriteRepository},
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use agency_cms::infrastructure::{
    database,
    repositories::{
        PostgresContactRepository, PostgresPortfolioReadRepository,
        PostgresPortfolioWriteRepository, PostgresPostReadRepository, PostgresPostWriteRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use agency_cms::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,sqlx=warn";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let portfolio_write_repo: Arc<dyn PortfolioWriteRepository> =
        Arc::new(PostgresPortfolioWriteRepository::new(pool.clone()));
    let portfolio_read_repo: Arc<dyn PortfolioReadRepository> =
        Arc::new(PostgresPortfolioReadRepository::new(pool.clone()));
    let contact_repo: Arc<dyn ContactRepository> =
        Arc::new(PostgresContactRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        post_write_repo,
        post_read_repo,
        portfolio_write_repo,
        portfolio_read_repo,
        contact_repo,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        contact_rate: Some(config.contact_rate()),
    };
    let app = build_router_with_options(HttpState { services }, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
