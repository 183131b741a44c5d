//! Axum-based API gateway for the Nexus portfolio site.
//!
//! Composition root: constructs exactly one `ContentProvider` per process,
//! wires the store handle, admin gate, chat backend, and contact relay into
//! route state, and tears the provider down on shutdown. The HTTP surface
//! stands in for the original page's views: read-only content routes, the
//! gated admin mutations, the streaming chat widget, and the contact card.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use dashmap::DashMap;
use nexus_core::{
    AdminGate, AdminPanel, ChatBackend, ChatConfig, ChatSession, ContactRelay, ContentProvider,
    GroqClient, SiteConfig,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared route state. Admin and chat session tables are process-local:
/// a restart locks the gate and forgets chat histories, the page-reload
/// analog of the original single-page site.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<SiteConfig>,
    pub(crate) provider: Arc<ContentProvider>,
    pub(crate) gate: Arc<AdminGate>,
    pub(crate) admin_sessions: Arc<DashMap<String, Arc<AdminPanel>>>,
    pub(crate) chat_config: ChatConfig,
    pub(crate) chat_backend: Arc<dyn ChatBackend>,
    pub(crate) chat_sessions: Arc<DashMap<String, Arc<Mutex<ChatSession>>>>,
    pub(crate) contact: Arc<ContactRelay>,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::content::health))
        .route("/api/v1/profile", get(handlers::content::get_profile))
        .route("/api/v1/projects", get(handlers::content::list_projects))
        .route("/api/v1/skills", get(handlers::content::list_skills))
        .route("/api/v1/experience", get(handlers::content::list_experience))
        .route("/api/v1/admin/unlock", post(handlers::admin::unlock))
        .route("/api/v1/admin/projects", post(handlers::admin::create_project))
        .route(
            "/api/v1/admin/projects/:id",
            put(handlers::admin::update_project).delete(handlers::admin::delete_project),
        )
        .route("/api/v1/admin/skills", post(handlers::admin::add_skill))
        .route(
            "/api/v1/admin/skills/:id",
            put(handlers::admin::update_skill).delete(handlers::admin::delete_skill),
        )
        .route("/api/v1/admin/reset", post(handlers::admin::request_reset))
        .route("/api/v1/admin/reset/confirm", post(handlers::admin::confirm_reset))
        .route("/api/v1/chat", post(handlers::chat::chat))
        .route("/api/v1/chat/stream", post(handlers::chat::chat_stream))
        .route("/api/v1/contact", post(handlers::contact::submit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn build_state(config: SiteConfig, provider: ContentProvider, chat_config: ChatConfig) -> AppState {
    let gate = Arc::new(AdminGate::new(config.admin_passphrase.clone()));
    let contact = Arc::new(ContactRelay::new(config.contact_endpoint.clone()));
    let chat_backend: Arc<dyn ChatBackend> = Arc::new(GroqClient::new(chat_config.clone()));
    AppState {
        config: Arc::new(config),
        provider: Arc::new(provider),
        gate,
        admin_sessions: Arc::new(DashMap::new()),
        chat_config,
        chat_backend,
        chat_sessions: Arc::new(DashMap::new()),
        contact,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() {
    // API keys live backend-side only; the frontend never sees them.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[nexus-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration failed to load");
            std::process::exit(1);
        }
    };

    let chat_config = ChatConfig::resolve();
    if chat_config.api_key.is_none() {
        warn!("no chat API key configured; the chat widget will answer with the offline message");
    }

    let provider = match ContentProvider::init(config.content_db_path()) {
        Ok(provider) => provider,
        Err(e) => {
            error!(error = %e, "content store failed to open");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let app_name = config.app_name.clone();
    let state = build_state(config, provider, chat_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    info!(%addr, app = %app_name, "gateway listening");

    if let Err(e) = axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server exited with error");
    }

    state.provider.shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use nexus_core::{default_projects, DEFAULT_RELAY_ENDPOINT};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app(dir: &tempfile::TempDir) -> Router {
        let config = SiteConfig {
            app_name: "Nexus Test".to_string(),
            port: 0,
            storage_path: dir.path().display().to_string(),
            admin_passphrase: "open-sesame".to_string(),
            contact_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        };
        let provider = ContentProvider::init(config.content_db_path()).unwrap();
        // No API key: the chat widget runs in offline mode and never
        // touches the network.
        router(build_state(config, provider, ChatConfig::default()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_and_public_views_respond() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let projects = body_json(response).await;
        assert_eq!(
            projects.as_array().unwrap().len(),
            default_projects().len()
        );

        let response = app
            .oneshot(Request::get("/api/v1/skills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let skills = body_json(response).await;
        assert_eq!(skills["categories"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn admin_routes_require_the_gate() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        // Wrong passphrase: locked out, nothing mutated.
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/unlock",
                json!({ "passphrase": "guess" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // No token: mutation routes refuse.
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/projects",
                json!({ "title": "X", "description": "Y", "technologies": "Rust", "category": "Tool" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Correct passphrase unlocks and the token drives a mutation.
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/unlock",
                json!({ "passphrase": "open-sesame" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let mut request = json_request(
            "POST",
            "/api/v1/admin/projects",
            json!({ "title": "Gateway Test", "description": "d", "technologies": "Rust, Axum", "category": "Tool" }),
        );
        request
            .headers_mut()
            .insert("x-admin-token", token.parse().unwrap());
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/api/v1/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let projects = body_json(response).await;
        assert_eq!(projects[0]["title"], "Gateway Test");
        assert_eq!(projects[0]["technologies"], json!(["Rust", "Axum"]));
    }

    #[tokio::test]
    async fn chat_without_credential_degrades_to_offline_message() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/chat",
                json!({ "message": "hello" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let messages = body["messages"].as_array().unwrap();
        let last = messages.last().unwrap();
        assert_eq!(last["text"], "Error: API Protocol Offline (Missing Key).");
        assert_eq!(last["isError"], true);
    }
}
