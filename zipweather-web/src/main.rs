//! zipweather web server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use zipweather_core::Config;
use zipweather_web::{app, state::AppState};

/// Web server for the zipweather postal-code weather lookup.
#[derive(Parser, Debug)]
#[command(name = "zipweather-web", version, about = "郵便番号から天気情報を取得するWebサーバー")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "ZIPWEATHER_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).init();

    let config = Config::load().context("設定の読み込みに失敗しました")?;
    let state = Arc::new(AppState::new(config));

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("リッスンアドレスが不正です: {}", args.listen))?;

    info!("zipweather web listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} にバインドできませんでした"))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
