#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up GATE_JWT_SECRET, GATE_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = portal_gate::config::config();
    tracing::info!("Starting Portal Gate in {:?} mode", config.environment);

    if let Err(e) = portal_gate::server::serve(config.server.port).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
