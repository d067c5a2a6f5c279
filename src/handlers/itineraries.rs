use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::entities::{Region, accommodation, activity, day, itinerary, transfer};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CreateItineraryRequest {
    pub name: String,
    pub region: Region,
    pub duration_nights: i32,
    #[serde(default)]
    pub days: Vec<CreateDayRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDayRequest {
    pub day_number: i32,
    pub day_summary: Option<String>,
    pub accommodation_id: Option<i32>,
    #[serde(default)]
    pub activities: Vec<CreateActivityRequest>,
    #[serde(default)]
    pub transfers: Vec<CreateTransferRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration_hours: Option<i32>,
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    pub description: String,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub method: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ItinerarySummary {
    pub id: i32,
    pub name: String,
    pub region: Region,
    pub duration_nights: i32,
}

#[derive(Debug, Serialize)]
pub struct ItineraryDetail {
    pub id: i32,
    pub name: String,
    pub region: Region,
    pub duration_nights: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub days: Vec<DayDetail>,
}

#[derive(Debug, Serialize)]
pub struct DayDetail {
    pub id: i32,
    pub day_number: i32,
    pub day_summary: Option<String>,
    pub accommodation: Option<accommodation::Model>,
    pub activities: Vec<activity::Model>,
    pub transfers: Vec<transfer::Model>,
}

/// Create an itinerary together with its nested day structure.
///
/// All rows are written in a single transaction; a failure on any insert
/// rolls the whole request back.
pub async fn create_itinerary(
    State(state): State<AppState>,
    Json(payload): Json<CreateItineraryRequest>,
) -> AppResult<(StatusCode, Json<ItineraryDetail>)> {
    if payload.duration_nights < 1 {
        return Err(AppError::Validation {
            field: "duration_nights",
            message: "duration_nights must be at least 1".to_string(),
        });
    }

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation {
            field: "name",
            message: "name must not be empty".to_string(),
        });
    }

    if let Some(dup) = duplicate_day_number(&payload.days) {
        return Err(AppError::BadRequest(format!(
            "Duplicate day number {} in itinerary request",
            dup
        )));
    }

    // Referenced accommodations must exist before anything is written
    let mut required: Vec<i32> = payload
        .days
        .iter()
        .filter_map(|d| d.accommodation_id)
        .collect();
    required.sort_unstable();
    required.dedup();

    if !required.is_empty() {
        let existing: Vec<i32> = accommodation::Entity::find()
            .filter(accommodation::Column::Id.is_in(required.clone()))
            .all(&state.db)
            .await?
            .iter()
            .map(|a| a.id)
            .collect();

        let missing: Vec<i32> = required
            .into_iter()
            .filter(|id| !existing.contains(id))
            .collect();

        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Accommodations not found with ids: {:?}",
                missing
            )));
        }
    }

    let mut days = payload.days;
    days.sort_by_key(|d| d.day_number);

    let txn = state.db.begin().await?;

    let created = itinerary::ActiveModel {
        name: Set(payload.name),
        region: Set(payload.region),
        duration_nights: Set(payload.duration_nights),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for day_data in days {
        let created_day = day::ActiveModel {
            itinerary_id: Set(created.id),
            day_number: Set(day_data.day_number),
            day_summary: Set(day_data.day_summary),
            accommodation_id: Set(day_data.accommodation_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for act in day_data.activities {
            activity::ActiveModel {
                day_id: Set(created_day.id),
                name: Set(act.name),
                description: Set(act.description),
                location: Set(act.location),
                duration_hours: Set(act.duration_hours),
                kind: Set(act.kind),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        for tr in day_data.transfers {
            transfer::ActiveModel {
                day_id: Set(created_day.id),
                description: Set(tr.description),
                from_location: Set(tr.from_location),
                to_location: Set(tr.to_location),
                method: Set(tr.method),
                duration_minutes: Set(tr.duration_minutes),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    let detail = load_detail(&state.db, created.id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// List all itineraries as summaries, in creation order
pub async fn list_itineraries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ItinerarySummary>>> {
    let itineraries = itinerary::Entity::find()
        .order_by_asc(itinerary::Column::Id)
        .all(&state.db)
        .await?;

    let summaries = itineraries
        .into_iter()
        .map(|i| ItinerarySummary {
            id: i.id,
            name: i.name,
            region: i.region,
            duration_nights: i.duration_nights,
        })
        .collect();

    Ok(Json(summaries))
}

/// Get the full day-by-day detail of one itinerary
pub async fn get_itinerary(
    State(state): State<AppState>,
    Path(itinerary_id): Path<i32>,
) -> AppResult<Json<ItineraryDetail>> {
    let detail = load_detail(&state.db, itinerary_id).await?;
    Ok(Json(detail))
}

async fn load_detail(db: &DatabaseConnection, itinerary_id: i32) -> AppResult<ItineraryDetail> {
    let itinerary = itinerary::Entity::find_by_id(itinerary_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Itinerary not found".to_string()))?;

    let days = day::Entity::find()
        .filter(day::Column::ItineraryId.eq(itinerary.id))
        .order_by_asc(day::Column::DayNumber)
        .all(db)
        .await?;

    let day_ids: Vec<i32> = days.iter().map(|d| d.id).collect();

    let mut activities = Vec::new();
    let mut transfers = Vec::new();
    if !day_ids.is_empty() {
        activities = activity::Entity::find()
            .filter(activity::Column::DayId.is_in(day_ids.clone()))
            .order_by_asc(activity::Column::Id)
            .all(db)
            .await?;
        transfers = transfer::Entity::find()
            .filter(transfer::Column::DayId.is_in(day_ids))
            .order_by_asc(transfer::Column::Id)
            .all(db)
            .await?;
    }

    let accommodation_ids: Vec<i32> = days.iter().filter_map(|d| d.accommodation_id).collect();
    let accommodations = if accommodation_ids.is_empty() {
        Vec::new()
    } else {
        accommodation::Entity::find()
            .filter(accommodation::Column::Id.is_in(accommodation_ids))
            .all(db)
            .await?
    };

    let day_details = days
        .into_iter()
        .map(|d| DayDetail {
            id: d.id,
            day_number: d.day_number,
            day_summary: d.day_summary.clone(),
            accommodation: d
                .accommodation_id
                .and_then(|id| accommodations.iter().find(|a| a.id == id).cloned()),
            activities: activities.iter().filter(|a| a.day_id == d.id).cloned().collect(),
            transfers: transfers.iter().filter(|t| t.day_id == d.id).cloned().collect(),
        })
        .collect();

    Ok(ItineraryDetail {
        id: itinerary.id,
        name: itinerary.name,
        region: itinerary.region,
        duration_nights: itinerary.duration_nights,
        created_at: itinerary.created_at.with_timezone(&Utc),
        updated_at: itinerary.updated_at.map(|t| t.with_timezone(&Utc)),
        days: day_details,
    })
}

fn duplicate_day_number(days: &[CreateDayRequest]) -> Option<i32> {
    let mut seen = HashSet::new();
    days.iter().map(|d| d.day_number).find(|n| !seen.insert(*n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day_number: i32) -> CreateDayRequest {
        CreateDayRequest {
            day_number,
            day_summary: None,
            accommodation_id: None,
            activities: Vec::new(),
            transfers: Vec::new(),
        }
    }

    #[test]
    fn test_duplicate_day_number_found() {
        let days = vec![day(1), day(2), day(2), day(3)];
        assert_eq!(duplicate_day_number(&days), Some(2));
    }

    #[test]
    fn test_no_duplicate_day_number() {
        let days = vec![day(1), day(2), day(3)];
        assert_eq!(duplicate_day_number(&days), None);
        assert_eq!(duplicate_day_number(&[]), None);
    }
}
