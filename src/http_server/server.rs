//! # HTTP Server
//!
//! Main HTTP server combining the collection routes with health, logging
//! and CORS.

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::records::{demo_items, Comment, Item, Todo, User};
use crate::rest_api::{Reply, RestServer};
use crate::store::{CollectionStore, MemoryStore};

use super::config::HttpServerConfig;
use super::middleware::log_requests;

/// HTTP server serving the configured collections
pub struct HttpServer {
    config: HttpServerConfig,
    collections: Vec<&'static str>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let api = mount_collections(&config);
        let collections = api.collections().to_vec();
        let router = Self::build_router(&config, api);
        Self {
            config,
            collections,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, api: RestServer) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(api.router())
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Names of the mounted collections
    pub fn collections(&self) -> &[&'static str] {
        &self.collections
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr = self.socket_addr();
        log_event_with_fields(Event::ServerStart, &[("addr", addr.as_str())]);

        let listener = TcpListener::bind(addr.as_str()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?.to_string();
        let collections = self.collections.join(",");
        log_event_with_fields(
            Event::Serving,
            &[("addr", local.as_str()), ("collections", collections.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn mount_collections(config: &HttpServerConfig) -> RestServer {
    let mut api = RestServer::new();
    for name in &config.collections {
        if api.collections().contains(&name.as_str()) {
            Logger::warn(
                Event::CollectionSkipped.as_str(),
                &[("collection", name.as_str()), ("reason", "duplicate")],
            );
            continue;
        }
        api = match name.as_str() {
            "items" => {
                let store: Arc<dyn CollectionStore<Item>> = if config.seed_demo_data {
                    Arc::new(MemoryStore::with_records(demo_items()))
                } else {
                    Arc::new(MemoryStore::<Item>::new())
                };
                api.collection(store)
            }
            "users" => api.collection::<User>(Arc::new(MemoryStore::<User>::new())),
            "comments" => api.collection::<Comment>(Arc::new(MemoryStore::<Comment>::new())),
            "todos" => api.collection::<Todo>(Arc::new(MemoryStore::<Todo>::new())),
            _ => {
                Logger::warn(
                    Event::CollectionSkipped.as_str(),
                    &[("collection", name.as_str()), ("reason", "unknown")],
                );
                api
            }
        };
    }
    api
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Reply<HealthStatus> {
    Reply::ok(HealthStatus { status: "ok" })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tower::ServiceExt;

    use crate::http_server::middleware::REQUEST_ID_HEADER;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        assert_eq!(server.collections(), &["items", "users", "comments", "todos"]);
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::with_config(HttpServerConfig::with_port(3000));
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_unknown_and_duplicate_collections_skipped() {
        let config = HttpServerConfig {
            collections: vec![
                "users".to_string(),
                "widgets".to_string(),
                "users".to_string(),
            ],
            ..Default::default()
        };
        let server = HttpServer::with_config(config);
        assert_eq!(server.collections(), &["users"]);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(HttpServer::new().router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_seeded_items() {
        let config = HttpServerConfig {
            seed_demo_data: true,
            ..Default::default()
        };
        let (status, body) = get_json(HttpServer::with_config(config).router(), "/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "Laptop", "price": 1000},
                {"id": 2, "name": "Phone", "price": 500},
                {"id": 3, "name": "Tablet", "price": 300}
            ])
        );
    }

    #[tokio::test]
    async fn test_disabled_collection_is_not_routed() {
        let config = HttpServerConfig {
            collections: vec!["items".to_string()],
            ..Default::default()
        };
        let (status, body) = get_json(HttpServer::with_config(config).router(), "/users").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = HttpServer::new().router().oneshot(request).await.unwrap();
        let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_serve_over_tcp_and_shut_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(HttpServer::new().serve(listener, async move {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        let text = String::from_utf8(raw).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK"));
        assert!(text.contains("content-type: application/json"));
        assert!(text.ends_with(r#"{"status":"ok"}"#));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
