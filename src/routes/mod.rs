use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::AppState;
use crate::handlers::{itineraries, recommended};

pub fn create_router(state: AppState) -> Router {
    // Static segments must be registered alongside `{id}`; the router gives
    // them priority, so `/itineraries/recommended/` never captures as an id.
    // Routes are registered with their full paths rather than via `nest`,
    // because under axum 0.8 a nested child route `/` matches `/itineraries`
    // (no trailing slash) rather than `/itineraries/`.
    Router::new()
        .route("/", get(root))
        .route(
            "/itineraries/",
            post(itineraries::create_itinerary).get(itineraries::list_itineraries),
        )
        .route("/itineraries/recommended/", get(recommended::by_duration))
        .route("/itineraries/{id}", get(itineraries::get_itinerary))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Travel Itinerary API!" }))
}
