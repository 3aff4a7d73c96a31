//! # forum-api
//!
//! Assembles the forum service from compile-time features and layered
//! settings, then serves the HTTP API.

use std::sync::Arc;

use anyhow::{Context, Result};
use api_adapters::AppState;
use auth_adapters::JwtAccessTokenVerifier;
use configs::{LogSettings, Settings};
use domains::{CommentRepository, LikeRepository, ReplyRepository, ThreadRepository};
use services::{CommentService, LikeService, ReplyService, ThreadService};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// The four repository ports, all served by one store.
struct Repositories {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl Repositories {
    fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ThreadRepository + CommentRepository + ReplyRepository + LikeRepository + 'static,
    {
        Self {
            threads: store.clone(),
            comments: store.clone(),
            replies: store.clone(),
            likes: store,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_logging(&settings.log);

    let repos = open_store(&settings).await?;
    let state = AppState {
        threads: Arc::new(ThreadService::new(
            repos.threads.clone(),
            repos.comments.clone(),
            repos.replies.clone(),
            repos.likes.clone(),
        )),
        comments: Arc::new(CommentService::new(repos.threads.clone(), repos.comments.clone())),
        replies: Arc::new(ReplyService::new(
            repos.threads.clone(),
            repos.comments.clone(),
            repos.replies.clone(),
        )),
        likes: Arc::new(LikeService::new(repos.threads, repos.comments, repos.likes)),
        tokens: Arc::new(JwtAccessTokenVerifier::new(&settings.auth.access_token_key)),
    };

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "forum-api listening");

    axum::serve(listener, api_adapters::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("forum-api stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = Registry::default().with(filter);
    if log.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[cfg(feature = "db-postgres")]
async fn open_store(settings: &Settings) -> Result<Repositories> {
    use secrecy::ExposeSecret;
    use storage_adapters::PostgresForumStore;

    match &settings.database.url {
        Some(url) => {
            let store = PostgresForumStore::connect(url.expose_secret(), settings.database.max_connections)
                .await
                .context("connecting to Postgres")?;
            info!("using Postgres store");
            Ok(Repositories::from_store(Arc::new(store)))
        }
        None => Ok(in_memory()),
    }
}

#[cfg(not(feature = "db-postgres"))]
async fn open_store(settings: &Settings) -> Result<Repositories> {
    if settings.database.url.is_some() {
        warn!("database.url is set but Postgres support is not compiled in");
    }
    Ok(in_memory())
}

fn in_memory() -> Repositories {
    warn!("no database configured, data lives in memory only");
    Repositories::from_store(Arc::new(storage_adapters::InMemoryForumStore::new()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
