//! Router server - builds the application from configuration and hands it
//! to the configured transport.
//!
//! The routing table is complete before any transport starts: controller
//! discovery and registration are awaited first.

use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use super::host::RouteTable;
use super::transport::{PrintConfig, PrintTransport, TransportConfig};
use crate::domains::controllers::{ControllerLoader, HandlerNames, ManifestLoader};
use crate::domains::resources::Application;

#[cfg(feature = "http")]
use super::transport::{
    HttpConfig,
    http::{HttpTransport, StubEndpoints},
};

/// Builds routing tables from a controllers directory.
#[derive(Clone)]
pub struct RouterServer {
    config: Arc<Config>,
}

impl RouterServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Discover the configured controllers and register them into a fresh
    /// routing table.
    #[instrument(skip_all)]
    pub async fn build<L>(&self, loader: &L) -> Result<Application<RouteTable<L::Handler>>>
    where
        L: ControllerLoader,
    {
        let routing = &self.config.routing;
        let mut app = Application::with_root(RouteTable::new(), &routing.app_root);
        app.load_resources(routing.controllers_dir(), loader).await?;
        info!(
            "Built {} route(s) for {} resource(s)",
            app.host().len(),
            app.resources().len()
        );
        Ok(app)
    }

    /// Run the configured transport.
    pub async fn run(self) -> Result<()> {
        info!("Starting transport: {}", self.config.transport.description());

        match self.config.transport.clone() {
            TransportConfig::Print(cfg) => self.print(cfg).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => self.serve(cfg).await,
        }
    }

    /// Print the route listing to stdout.
    pub async fn print(&self, config: PrintConfig) -> Result<()> {
        let app = self.build(&ManifestLoader::new(HandlerNames)).await?;
        PrintTransport::new(config).run(&app, std::io::stdout().lock())?;
        Ok(())
    }

    /// Serve the routes over HTTP with stub endpoints.
    #[cfg(feature = "http")]
    pub async fn serve(&self, config: HttpConfig) -> Result<()> {
        let app = self.build(&ManifestLoader::new(StubEndpoints)).await?;
        HttpTransport::new(config).run(app.into_host()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::core::host::Method;
    use crate::domains::resources::{DEFAULT_CONTROLLERS_DIR, ResourceError};
    use std::fs;

    fn server_for(root: &std::path::Path) -> RouterServer {
        let mut config = Config::default();
        config.routing.app_root = root.to_path_buf();
        RouterServer::new(config)
    }

    #[tokio::test]
    async fn test_build_from_default_controllers_dir() {
        let root = tempfile::tempdir().unwrap();
        let controllers = root.path().join(DEFAULT_CONTROLLERS_DIR);
        fs::create_dir(&controllers).unwrap();
        fs::write(
            controllers.join("photos_controller.json"),
            r#"{ "index": "photos#index", "create": "photos#create" }"#,
        )
        .unwrap();

        let app = server_for(root.path())
            .build(&ManifestLoader::new(HandlerNames))
            .await
            .unwrap();

        let methods: Vec<_> = app.host().entries().iter().map(|e| e.method()).collect();
        assert_eq!(methods, vec![Method::Get, Method::Post]);
        assert_eq!(
            app.to_string(),
            "photos:\nGET\tindex\t/photos.:format?\nPOST\tcreate\t/photos.:format?\n"
        );
    }

    #[tokio::test]
    async fn test_build_without_controllers_dir_fails() {
        let root = tempfile::tempdir().unwrap();
        let err = server_for(root.path())
            .build(&ManifestLoader::new(HandlerNames))
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::Discovery { .. })
        ));
    }

    #[test]
    fn test_server_metadata() {
        let server = RouterServer::new(Config::default());
        assert_eq!(server.name(), "resource-router");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}
