use parking_calculator::api::{AppState, create_router};
use parking_calculator::config::{TariffConfig, TariffLoader};
use tracing::info;

#[tokio::main]
async fn main() {
    let tariff = match std::env::var("TARIFF_CONFIG") {
        Ok(path) => TariffLoader::load(&path)
            .expect("Failed to load tariff configuration")
            .into_config(),
        Err(_) => TariffConfig::default(),
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = create_router(AppState::new(tariff));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");

    info!(address = %bind_addr, "parking calculator listening");
    println!("parking calculator listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start HTTP server");
}
