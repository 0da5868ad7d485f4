use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{category, order, product, retailer, retailer_order, user};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route(
            "/categories",
            get(category::list_categories).post(category::create_category),
        )
        .route("/categories/{id}", get(category::get_category))
        .route(
            "/products",
            get(product::list_products).post(product::create_product),
        )
        .route("/products/popular", get(product::list_popular))
        .route("/products/new", get(product::list_new_arrivals))
        .route("/products/{id}", get(product::get_product))
        .route("/products/{id}/stock", patch(product::update_stock))
        // Users
        .route("/users/register", post(user::register))
        .route("/users/login", post(user::login))
        .route("/users/{id}", get(user::get_user).patch(user::update_user))
        .route("/users/{id}/orders", get(order::list_user_orders))
        .route("/users/{id}/retailer", get(retailer::get_retailer_by_user))
        // Consumer orders
        .route("/orders", post(order::place_order))
        .route("/orders/{id}", get(order::get_order))
        .route("/orders/{id}/status", patch(order::update_order_status))
        // Retailers
        .route("/retailers/register", post(retailer::register))
        .route("/retailers/pending", get(retailer::list_pending))
        .route("/retailers/verified", get(retailer::list_verified))
        .route(
            "/retailers/{id}",
            get(retailer::get_retailer).patch(retailer::update_retailer),
        )
        .route("/retailers/{id}/documents", post(retailer::add_document))
        .route(
            "/retailers/{id}/verification",
            patch(retailer::set_verification),
        )
        .route(
            "/retailers/{id}/orders",
            get(retailer_order::list_retailer_orders),
        )
        // Bulk orders
        .route(
            "/retailer-orders",
            post(retailer_order::place_retailer_order),
        )
        .route(
            "/retailer-orders/{id}",
            get(retailer_order::get_retailer_order),
        )
        .route(
            "/retailer-orders/{id}/status",
            patch(retailer_order::update_status),
        )
        .route(
            "/retailer-orders/{id}/payment-status",
            patch(retailer_order::update_payment_status),
        )
}

async fn banner() -> &'static str {
    "FreshMart backend is running"
}
