//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    ChargeCustomerRequest, ChargeDto, ContactPersonDto, ContactPersonRequest, CreateChargeRequest,
    CreateCustomerRequest, CustomerDto,
};
use crate::application::SharedCommandBus;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::api_version::api_version_middleware;
use crate::interfaces::http::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{customers, payments};
use crate::shared::shutdown::ShutdownSignal;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        customers::create_customer,
        customers::get_customer,
        payments::create_charge,
    ),
    components(
        schemas(
            ApiResponse<i32>,
            ApiResponse<String>,
            ApiResponse<CustomerDto>,
            CreateCustomerRequest,
            ContactPersonRequest,
            CustomerDto,
            ContactPersonDto,
            CreateChargeRequest,
            ChargeCustomerRequest,
            ChargeDto,
            HealthResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Customers", description = "Customer company registration"),
        (name = "Payments", description = "Pix charge creation"),
    ),
    info(
        title = "E-commerce API",
        version = "1.0.0",
        description = "Customer registration and Pix payment charges",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Everything the HTTP layer needs from the running service.
#[derive(Clone)]
pub struct ApiContext {
    pub bus: SharedCommandBus,
    pub repos: Arc<dyn RepositoryProvider>,
    /// Handed to every command as its cancellation signal
    pub cancel: ShutdownSignal,
    /// `None` when the memory storage driver is active
    pub db: Option<DatabaseConnection>,
    pub prometheus: PrometheusHandle,
}

/// Create the API router with all routes
pub fn create_api_router(ctx: ApiContext) -> Router {
    let customer_state = customers::CustomerHandlerState {
        bus: ctx.bus.clone(),
        repos: ctx.repos.clone(),
        cancel: ctx.cancel.clone(),
    };
    let payment_state = payments::PaymentHandlerState {
        bus: ctx.bus,
        cancel: ctx.cancel,
    };

    let customer_routes = Router::new()
        .route("/customers", post(customers::create_customer))
        .route("/customers/{id}", get(customers::get_customer))
        .with_state(customer_state);

    let payment_routes = Router::new()
        .route("/payments/pix/charges", post(payments::create_charge))
        .with_state(payment_state);

    let v1 = customer_routes
        .merge(payment_routes)
        .layer(middleware::from_fn(api_version_middleware));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db: ctx.db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: ctx.prometheus,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api/v1", v1)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
