mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
