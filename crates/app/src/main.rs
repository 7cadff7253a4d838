mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "hearth={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    tracing::info!("Starting with a fresh in-memory ledger");

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let ledger = engine::Ledger::new();

    server::run_with_listener(ledger, listener).await?;
    Ok(())
}
