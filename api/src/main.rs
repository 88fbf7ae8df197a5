use std::{net::SocketAddr, sync::Arc};

use bbs_api::{config::BbsApiConfig, context::ApiContext, server};
use bbs_db::storage::memory::MemoryStorage;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BbsApiConfig::parse();
    let bind_addr = config.bind_addr;
    let dump_openapi = config.dump_openapi;

    let context = ApiContext::new(config, Arc::new(MemoryStorage::new()));
    let (router, api) = server::make(context)?;

    if dump_openapi {
        print!("{}", api.to_pretty_json()?);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or("bbs_api=info,bbs_common=info,bbs_db=info".into()),
        )
        .pretty()
        .init();

    let listener = TcpListener::bind(bind_addr).await?;

    info!("Listening on http://{:?}", bind_addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
