mod catalog;
mod facades;
mod models;
mod render;
mod routes;
mod utils;

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;
use poem::endpoint::StaticFilesEndpoint;
use poem::{EndpointExt, Server, listener::TcpListener};
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogStore;
use crate::render::ViewRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

    let catalog_path = env::var("CATALOG_PATH").unwrap_or_else(|_| "data/food.json".to_string());
    let views_dir = env::var("VIEWS_DIR").unwrap_or_else(|_| "views".to_string());
    let public_dir =
        PathBuf::from(env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()));

    let store = CatalogStore::new(catalog_path);
    let views = ViewRenderer::new(views_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let app = routes::site::routes()
        .nest("/css", StaticFilesEndpoint::new(public_dir.join("css")))
        .nest("/js", StaticFilesEndpoint::new(public_dir.join("js")))
        .data(store)
        .data(views);

    let listener = TcpListener::bind(addr);

    println!("Server running at http://localhost:{}", port);
    Server::new(listener)
        .run_with_graceful_shutdown(
            app,
            async {
                signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
                println!("\nReceived Ctrl+C, shutting down gracefully...");
            },
            None,
        )
        .await?;

    println!("Server stopped.");
    Ok(())
}
