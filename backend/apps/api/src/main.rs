//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use account::{AccountConfig, PgAccountRepository, SmtpMailer, account_router};
use account::infra::smtp::SmtpConfig;
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use posts::{PgPostRepository, posts_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,account=info,posts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let account_config = load_account_config()?;

    let account_repo = PgAccountRepository::new(pool.clone());
    let mailer = SmtpMailer::new(load_smtp_config()?)?;
    let post_repo = PgPostRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/account",
            account_router(account_repo, mailer, account_config.clone()),
        )
        .nest("/posts", posts_router(post_repo, account_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the account configuration from the environment
///
/// In debug builds missing secrets fall back to random development values;
/// in production all three must be set (standard base64).
fn load_account_config() -> anyhow::Result<AccountConfig> {
    let client_url =
        env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    if cfg!(debug_assertions)
        && env::var("SESSION_SECRET").is_err()
    {
        tracing::warn!("SESSION_SECRET not set, using random development secrets");
        return Ok(AccountConfig {
            client_url,
            ..AccountConfig::development()
        });
    }

    Ok(AccountConfig {
        session_secret: decode_secret("SESSION_SECRET")?,
        activation_secret: decode_secret("ACTIVATION_SECRET")?,
        reset_secret: decode_secret("RESET_SECRET")?,
        client_url,
        ..AccountConfig::default()
    })
}

fn decode_secret(name: &str) -> anyhow::Result<Vec<u8>> {
    let value =
        env::var(name).map_err(|_| anyhow::anyhow!("{} must be set in environment", name))?;

    let secret = Engine::decode(&general_purpose::STANDARD, &value)
        .map_err(|e| anyhow::anyhow!("{} is not valid base64: {}", name, e))?;

    if secret.len() < 32 {
        anyhow::bail!("{} must decode to at least 32 bytes", name);
    }

    Ok(secret)
}

fn load_smtp_config() -> anyhow::Result<SmtpConfig> {
    Ok(SmtpConfig {
        host: env::var("SMTP_HOST").map_err(|_| anyhow::anyhow!("SMTP_HOST must be set"))?,
        port: env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()?,
        username: env::var("SMTP_USERNAME")
            .map_err(|_| anyhow::anyhow!("SMTP_USERNAME must be set"))?,
        password: env::var("SMTP_PASSWORD")
            .map_err(|_| anyhow::anyhow!("SMTP_PASSWORD must be set"))?,
        from: env::var("SMTP_FROM").map_err(|_| anyhow::anyhow!("SMTP_FROM must be set"))?,
    })
}
