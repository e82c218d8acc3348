#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use glass_saas::core::config::Config;
    use glass_saas::core::server;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load server config from environment variables
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    tracing::info!(
        "Config loaded: log_level={}, compression={}",
        config.tracing_level(),
        config.compression
    );

    if let Err(err) = server::serve(&config).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
