use crate::{conf::Conf, leads::LeadBook, telemetry::RequestIdProducer};
use static_routes::*;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit, ServiceBuilderExt,
};

#[derive(Clone)]
pub struct AppState {
    pub leads: LeadBook,
}

pub fn router(static_dir: &Path) -> Router<AppState> {
    use crate::routes::*;

    let routes = routes().api;

    let api_router = Router::new()
        .route(routes.health_check.get().postfix(), get(health_check))
        .route(
            routes.submit.post().postfix(),
            post(submit).fallback(method_not_allowed),
        );

    let request_tracing_layer = tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &hyper::http::Request<hyper::Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or_default();

                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id();

    // the frontend routes on its own, unknown paths get the app shell
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_router)
        .fallback_service(frontend)
        .layer(request_tracing_layer)
        .layer(CompressionLayer::new())
}

pub struct Application {
    port: u16,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
    leads: LeadBook,
    host: String,
}

impl Application {
    pub async fn build(conf: &Conf) -> anyhow::Result<Self> {
        let address = format!("{}:{}", conf.host, conf.port);
        let listener = std::net::TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on http://{}:{}", conf.host, port);

        if !conf.static_dir.join("index.html").exists() {
            tracing::warn!(
                "{} has no index.html, build the frontend first",
                conf.static_dir.display()
            );
        }

        let leads = LeadBook::new();

        let app = router(&conf.static_dir).with_state(AppState {
            leads: leads.clone(),
        });

        let server = axum::Server::from_tcp(listener)
            .context("Failed to hand the listener to hyper")?
            .serve(app.into_make_service());

        Ok(Self {
            server: Box::pin(server),
            leads,
            port,
            host: conf.host.clone(),
        })
    }

    // consumes, one server per application
    pub fn server(self) -> impl std::future::Future<Output = hyper::Result<()>> + Send {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn leads(&self) -> LeadBook {
        self.leads.clone()
    }
}
