//! Top-level API router.
//!
//! Wires the resource routers under `/api` and applies the cross-cutting
//! layers: request tracing, request timeout and CORS.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::memory::{InMemoryGradeStore, InMemoryNumberStore};
use crate::adapters::postgres::{
    PostgresGradeReader, PostgresGradeRepository, PostgresNumberReader, PostgresNumberRepository,
};
use crate::application::handlers::grade::{AddGradeHandler, ListGradeStandingsHandler};
use crate::application::handlers::number::{AddNumberHandler, ListNumberPairsHandler};
use crate::config::AppConfig;
use crate::domain::grade::ClassPolicy;
use crate::ports::{GradeReader, GradeRepository, NumberReader, NumberRepository};

use super::grades::{grade_routes, GradeHandlers};
use super::numbers::{number_routes, NumberHandlers};

/// The storage ports the API runs against.
#[derive(Clone)]
pub struct ApiPorts {
    pub number_reader: Arc<dyn NumberReader>,
    pub number_repository: Arc<dyn NumberRepository>,
    pub grade_reader: Arc<dyn GradeReader>,
    pub grade_repository: Arc<dyn GradeRepository>,
}

impl ApiPorts {
    /// Both resources backed by fresh in-memory stores.
    pub fn in_memory() -> Self {
        let numbers = InMemoryNumberStore::new();
        let grades = InMemoryGradeStore::new();
        Self {
            number_reader: Arc::new(numbers.clone()),
            number_repository: Arc::new(numbers),
            grade_reader: Arc::new(grades.clone()),
            grade_repository: Arc::new(grades),
        }
    }

    /// Both resources backed by PostgreSQL through one shared pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            number_reader: Arc::new(PostgresNumberReader::new(pool.clone())),
            number_repository: Arc::new(PostgresNumberRepository::new(pool.clone())),
            grade_reader: Arc::new(PostgresGradeReader::new(pool.clone())),
            grade_repository: Arc::new(PostgresGradeRepository::new(pool)),
        }
    }
}

/// Router behavior derived from configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub class_policy: ClassPolicy,
    pub validation_details: bool,
    pub enable_tracing: bool,
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl RouterSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            class_policy: ClassPolicy::from_flags(config.features.allow_english_class),
            validation_details: config.features.validation_details,
            enable_tracing: config.features.enable_tracing,
            request_timeout: config.server.request_timeout(),
            cors_origins: config.server.cors_origins_list(),
        }
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            class_policy: ClassPolicy::standard(),
            validation_details: true,
            enable_tracing: true,
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Creates the complete API router.
///
/// # Routes
/// - `GET|POST /api/numbers`
/// - `GET|POST /api/grades`
pub fn api_router(ports: ApiPorts, settings: &RouterSettings) -> Router {
    let numbers = NumberHandlers::new(
        Arc::new(AddNumberHandler::new(ports.number_repository)),
        Arc::new(ListNumberPairsHandler::new(ports.number_reader)),
        settings.validation_details,
    );
    let grades = GradeHandlers::new(
        Arc::new(AddGradeHandler::new(
            ports.grade_repository,
            settings.class_policy.clone(),
        )),
        Arc::new(ListGradeStandingsHandler::new(ports.grade_reader)),
        settings.validation_details,
    );

    let router = Router::new()
        .nest("/api/numbers", number_routes(numbers))
        .nest("/api/grades", grade_routes(grades))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins));

    if settings.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
