//! HTTP server: server-side rendering of the landing page plus the static
//! WASM/CSS bundle.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use std::net::SocketAddr;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, shell};
use crate::core::config::Config;

/// Server start-up and runtime errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load Leptos configuration: {0}")]
    Configuration(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the application router for the given Leptos options
pub fn router(leptos_options: LeptosOptions, config: &Config) -> Router {
    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) variants when they exist
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    if config.compression {
        app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    }
}

/// Load the Leptos options, bind the listener and serve until shutdown
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf =
        get_configuration(None).map_err(|err| ServerError::Configuration(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = router(leptos_options, config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, compression = config.compression, "listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_mentions_address() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        let err = ServerError::Bind {
            addr,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };

        let message = err.to_string();
        assert!(message.contains("127.0.0.1:3000"));
        assert!(message.contains("address in use"));
    }

    #[test]
    fn test_configuration_error_message() {
        let err = ServerError::Configuration("missing [package.metadata.leptos]".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to load Leptos configuration: missing [package.metadata.leptos]"
        );
    }
}
