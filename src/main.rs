mod amendment;
mod db;
mod gateway;
mod models;
mod rules;
mod upsell;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use amendment::{AddProductRequest, AmendmentEngine, AmendmentResponse, LineItemResponse};
use gateway::PgOrderGateway;
use models::{OrderStatus, PaymentMethod};
use rules::PgRuleStore;
use upsell::{UpsellProduct, UpsellRepository, UpsellResponse, UpsellService};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        amendment::handlers::add_product_to_order,
        upsell::handlers::order_upsells,
    ),
    components(
        schemas(
            AddProductRequest,
            AmendmentResponse,
            LineItemResponse,
            UpsellResponse,
            UpsellProduct,
            OrderStatus,
            PaymentMethod,
        )
    ),
    tags(
        (name = "amendments", description = "Post-purchase order amendment endpoints"),
        (name = "upsells", description = "Confirmation-page upsell endpoints")
    ),
    info(
        title = "After-Sale Manager API",
        version = "1.0.0",
        description = "Adds frequently-bought-together products to placed Cash-on-Delivery orders, with configured discounts and bundle rewards",
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: AmendmentEngine,
    pub upsell: UpsellService,
}

/// Creates and configures the application router
/// Wires the Postgres gateway and rule store into the amendment engine,
/// maps all API endpoints, and adds CORS middleware
fn create_router(db: PgPool) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let order_gateway = Arc::new(PgOrderGateway::new(db.clone()));
    let rule_store = Arc::new(PgRuleStore::new(db.clone()));

    let engine = AmendmentEngine::new(order_gateway.clone(), rule_store);
    let upsell = UpsellService::new(order_gateway, Arc::new(UpsellRepository::new(db)));

    let state = AppState { engine, upsell };

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route(
            "/api/orders/:order_id/amendments",
            post(amendment::handlers::add_product_to_order),
        )
        .route(
            "/api/orders/:order_id/upsells",
            get(upsell::handlers::order_upsells),
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("After-Sale Manager API - Starting...");

    // Get configuration from environment variables
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let app = create_router(db_pool);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("After-Sale Manager API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
