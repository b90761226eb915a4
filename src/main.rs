use ecotrack::{resolve_data_dir, AppState, GoalStore, HistoryStore, KvStore};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;
    info!("persisting snapshots under {}", data_dir.display());

    let kv = KvStore::dir(data_dir);
    let history = HistoryStore::load(kv.clone()).await;
    let goals = GoalStore::load(kv).await;
    let app = ecotrack::router(AppState::new(history, goals));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
