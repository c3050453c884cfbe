mod config;
mod reply;
mod routes;
mod state;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();
    let static_dir = config.static_dir.display().to_string();
    let state = state::AppState::new(config);

    let app = routes::leptos_app(state).map_err(ServerError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, %static_dir, "aeon listening");
    axum::serve(listener, app).await?;
    Ok(())
}
