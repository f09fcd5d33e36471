use axum::http::{self, HeaderValue, Method};
use dotenvy::dotenv;
use env_logger::Builder;
use log::{info, LevelFilter};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use server::{
    app,
    models::config::DebugConfig,
    services::{store::LocalStore, word_service::WordSource},
    state::AppState,
    utils::config::CONFIG,
};

fn init_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .filter_module("tower_http", LevelFilter::Debug)
        .parse_default_env()
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .format_target(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("Warning: failed to load .env: {}", e);
    }

    init_logger();

    let debug_config = DebugConfig::from_env();
    if debug_config.enabled {
        info!("debug config: {:?}", debug_config);
    }

    let words = WordSource::from_settings(CONFIG.word_service_url.as_deref(), &CONFIG.words_path)?;
    let store = LocalStore::open(CONFIG.store_path.clone());
    let state = AppState::new(debug_config, words, store);

    let origins = [CONFIG.cors_origin.parse::<HeaderValue>()?];
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([http::header::CONTENT_TYPE]);

    let app = app::create_app(state).layer(cors).layer(
        TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
            tracing::info_span!(
                "HTTP request",
                method = %request.method(),
                uri = %request.uri(),
            )
        }),
    );

    let listener = tokio::net::TcpListener::bind(&CONFIG.bind_addr).await?;
    info!("listening on http://{}", CONFIG.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
