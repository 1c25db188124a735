mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::cli::{StorageBackendArg, CLI};
use crate::state::AppState;
use clap::Parser;
use jiff::tz::TimeZone;
use pidforge_minter::{Encoder, EncoderSettings, InMemoryStore, Minter, PidMinter};
use pidforge_storage::MySqlStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        doi_prefix = %config.doi_prefix,
        doi_namespace = %config.doi_namespace,
        urn_namespace = %config.urn_namespace,
        timezone = %config.timezone,
        "starting pidforge gateway"
    );

    let timezone = TimeZone::get(&config.timezone)?;

    let encoder = Encoder::new(
        EncoderSettings::builder()
            .doi_prefix(config.doi_prefix)
            .doi_namespace(config.doi_namespace)
            .urn_namespace(config.urn_namespace)
            .build(),
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            let minter = PidMinter::new(InMemoryStore::new(), encoder);
            run_server(config.listen_addr, minter, timezone).await
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(&mysql_dsn).await?;
            let minter = PidMinter::new(store, encoder);
            run_server(config.listen_addr, minter, timezone).await
        }
    }
}

async fn run_server<M: Minter>(
    listen_addr: SocketAddr,
    minter: M,
    timezone: TimeZone,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::builder()
        .minter(Arc::new(minter))
        .timezone(timezone)
        .build();

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state)).await?;
    Ok(())
}
