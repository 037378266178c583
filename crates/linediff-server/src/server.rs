use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Line diff HTTP server.
pub struct DiffServer {
    config: ServerConfig,
}

impl DiffServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(&self.config)
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("linediff server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("linediff server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = DiffServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:54787".parse().unwrap());
    }

    #[test]
    fn router_builds_with_and_without_cors() {
        let _router = DiffServer::new(ServerConfig::default()).router();
        let config = ServerConfig {
            cors: false,
            ..ServerConfig::default()
        };
        let _router = DiffServer::new(config).router();
    }
}
