use axum::{
    Json,
    extract::{Query, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::entities::Region;
use crate::entities::recommended_itinerary::{
    self, DayPlan, MAX_DURATION_NIGHTS, MIN_DURATION_NIGHTS,
};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct RecommendedQuery {
    pub duration: i32,
}

#[derive(Debug, Serialize)]
pub struct RecommendedItineraryResponse {
    pub id: i32,
    pub name: String,
    pub region: Region,
    pub duration_nights: i32,
    pub days: Vec<DayPlan>,
}

/// List recommended itineraries matching an exact trip duration
pub async fn by_duration(
    State(state): State<AppState>,
    Query(params): Query<RecommendedQuery>,
) -> AppResult<Json<Vec<RecommendedItineraryResponse>>> {
    if !(MIN_DURATION_NIGHTS..=MAX_DURATION_NIGHTS).contains(&params.duration) {
        return Err(AppError::Validation {
            field: "duration",
            message: format!(
                "duration must be between {} and {} nights",
                MIN_DURATION_NIGHTS, MAX_DURATION_NIGHTS
            ),
        });
    }

    let rows = recommended_itinerary::Entity::find()
        .filter(recommended_itinerary::Column::DurationNights.eq(params.duration))
        .order_by_asc(recommended_itinerary::Column::Id)
        .all(&state.db)
        .await?;

    let mut responses = Vec::with_capacity(rows.len());
    for row in rows {
        let days: Vec<DayPlan> = serde_json::from_value(row.plan).map_err(|e| {
            AppError::Internal(format!("Malformed plan for recommended itinerary {}: {}", row.id, e))
        })?;
        responses.push(RecommendedItineraryResponse {
            id: row.id,
            name: row.name,
            region: row.region,
            duration_nights: row.duration_nights,
            days,
        });
    }

    Ok(Json(responses))
}
