//! HTTP transport implementation.
//!
//! Serves a [`RouteTable`] of [`Endpoint`]s through axum. Every request
//! goes to a single fallback that resolves it with [`RouteTable::lookup`],
//! so the `:param?` / `.:format?` template syntax is matched by the table
//! rather than by axum's own router.

use axum::{
    Json, Router,
    body::Body,
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use futures::{FutureExt, future::BoxFuture};
use http::StatusCode;
use http_body_util::BodyExt;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::host::{PathParams, RouteTable};
use crate::domains::controllers::HandlerResolver;

/// A shared async request handler.
pub type Endpoint = Arc<dyn Fn(RouteRequest) -> BoxFuture<'static, Response> + Send + Sync>;

/// Wrap an async function as an [`Endpoint`].
pub fn endpoint<F, Fut>(handler: F) -> Endpoint
where
    F: Fn(RouteRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |request| handler(request).boxed())
}

/// A request that matched a route, with the extracted path parameters.
pub struct RouteRequest {
    pub request: Request,
    pub params: PathParams,
}

impl RouteRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Format requested through the `.:format?` path suffix.
    pub fn format(&self) -> Option<&str> {
        self.param("format")
    }

    /// Collect the request body.
    pub async fn body_bytes(self) -> Result<Bytes, axum::Error> {
        let collected = self.request.into_body().collect().await?;
        Ok(collected.to_bytes())
    }
}

/// Resolves every handler reference to an endpoint that answers with a JSON
/// description of the match. Used to serve a controllers directory before
/// any real handler exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubEndpoints;

impl HandlerResolver for StubEndpoints {
    type Handler = Endpoint;

    fn resolve(&self, reference: &str) -> Option<Endpoint> {
        let reference = Arc::<str>::from(reference);
        Some(endpoint(move |route: RouteRequest| {
            let reference = reference.clone();
            async move {
                let method = route.request.method().to_string();
                let path = route.request.uri().path().to_string();
                let format = route.format().map(str::to_string);
                let params = route.params.clone();
                let body_length = route.body_bytes().await.map(|b| b.len()).unwrap_or(0);

                Json(serde_json::json!({
                    "handler": &*reference,
                    "method": method,
                    "path": path,
                    "params": params,
                    "format": format,
                    "body_length": body_length,
                }))
                .into_response()
            }
        }))
    }
}

/// Build an axum router dispatching through `table`.
pub fn into_router(table: RouteTable<Endpoint>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(Arc::new(table))
        .layer(TraceLayer::new_for_http())
}

#[instrument(skip_all, fields(method = %request.method(), path = %request.uri().path()))]
async fn dispatch(State(table): State<Arc<RouteTable<Endpoint>>>, request: Request) -> Response {
    let Some(found) = table.lookup(request.method().as_str(), request.uri().path()) else {
        debug!("No route matched");
        return (StatusCode::NOT_FOUND, Body::from("Not Found")).into_response();
    };

    debug!("Matched {} {}", found.entry.method(), found.entry.template());
    let handler = found.entry.handler().clone();
    handler(RouteRequest {
        request,
        params: found.params,
    })
    .await
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Serve `table` until the server stops.
    pub async fn run(self, table: RouteTable<Endpoint>) -> TransportResult<()> {
        let addr = self.address();
        let routes = table.len();

        let mut app = into_router(table);
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} ({} routes, CORS {})",
            addr, routes, cors_status
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::HostRouter;
    use crate::domains::controllers::ControllerDefinition;
    use crate::domains::resources::Application;
    use tower::ServiceExt;

    fn named(name: &'static str) -> Endpoint {
        endpoint(move |route: RouteRequest| async move {
            let id = route.param("photo").unwrap_or("-").to_string();
            let format = route.format().unwrap_or("html").to_string();
            format!("{name} {id} {format}").into_response()
        })
    }

    fn photo_router() -> Router {
        let mut app = Application::new(RouteTable::new());
        app.resource(
            "photos",
            ControllerDefinition::new()
                .action("all", named("all"))
                .action("index", named("index"))
                .action("create", named("create"))
                .action("show", named("show"))
                .action("destroy", named("destroy")),
        );
        into_router(app.into_host())
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let request = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_dispatch_by_verb_and_path() {
        assert_eq!(
            send(photo_router(), "GET", "/photos").await,
            (StatusCode::OK, "index - html".to_string())
        );
        assert_eq!(
            send(photo_router(), "POST", "/photos.json").await,
            (StatusCode::OK, "create - json".to_string())
        );
        assert_eq!(
            send(photo_router(), "GET", "/photos/17.xml").await,
            (StatusCode::OK, "show 17 xml".to_string())
        );
        assert_eq!(
            send(photo_router(), "DELETE", "/photos/17").await,
            (StatusCode::OK, "destroy 17 html".to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_falls_back_to_wildcard() {
        assert_eq!(
            send(photo_router(), "PUT", "/photos/17").await,
            (StatusCode::OK, "all 17 html".to_string())
        );
        assert_eq!(
            send(photo_router(), "GET", "/photos/17/thumbnail").await,
            (StatusCode::OK, "all 17 html".to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_not_found() {
        let (status, body) = send(photo_router(), "GET", "/users").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn test_stub_endpoints_describe_match() {
        let mut table = RouteTable::new();
        let handler = StubEndpoints.resolve("photos#show").unwrap();
        table.get("/photos/:photo.:format?", handler);

        let (status, body) = send(into_router(table), "GET", "/photos/3.json").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["handler"], "photos#show");
        assert_eq!(value["method"], "GET");
        assert_eq!(value["params"]["photo"], "3");
        assert_eq!(value["format"], "json");
        assert_eq!(value["body_length"], 0);
    }
}
