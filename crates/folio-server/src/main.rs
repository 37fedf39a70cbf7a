//! Binary entrypoint for the folio HTTP server.
//!
//! Reads configuration from environment variables:
//! - `FOLIO_DB_PATH`: SQLite database file path (default: "folio.db")
//! - `FOLIO_DATA_DIR`: data directory holding project workspaces (default: "folio-data")
//! - `FOLIO_PORT`: Server listen port (default: "3000")

use std::path::PathBuf;

use folio_server::router::build_router;
use folio_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("FOLIO_DB_PATH")
        .unwrap_or_else(|_| "folio.db".to_string());
    let data_dir = std::env::var("FOLIO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("folio-data"));
    let port = std::env::var("FOLIO_PORT")
        .unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(&db_path, &data_dir)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("folio server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
