mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_itinerary_round_trip() {
    let app = common::spawn_app(true).await;

    let payload = json!({
        "name": "My Custom Phuket Trip",
        "region": "Phuket",
        "duration_nights": 2,
        "days": [
            {
                "day_number": 1,
                "day_summary": "Arrival and beach",
                "accommodation_id": 1,
                "activities": [],
                "transfers": [
                    {
                        "description": "Phuket Airport to Hotel Transfer",
                        "from_location": "Phuket Airport (HKT)",
                        "to_location": "Phuket Hotel",
                        "method": "Private Car",
                        "duration_minutes": 60
                    }
                ]
            },
            {
                "day_number": 2,
                "day_summary": "Island tour",
                "accommodation_id": 1,
                "activities": [
                    {
                        "name": "Phi Phi Islands Day Tour",
                        "description": "Full day speedboat tour",
                        "duration_hours": 8,
                        "kind": "Tour"
                    }
                ],
                "transfers": []
            }
        ]
    });

    let (status, created) = common::post_json(&app, "/itineraries/", payload).await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(created["name"], "My Custom Phuket Trip");
    assert_eq!(created["region"], "Phuket");
    assert_eq!(created["duration_nights"], 2);

    let days = created["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["transfers"].as_array().unwrap().len(), 1);
    assert_eq!(days[0]["activities"].as_array().unwrap().len(), 0);
    assert_eq!(days[1]["activities"].as_array().unwrap().len(), 1);
    assert_eq!(days[0]["accommodation"]["id"], 1);

    // A subsequent detail fetch returns identical content
    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = common::get(&app, &format!("/itineraries/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_sorts_days_by_day_number() {
    let app = common::spawn_app(true).await;

    let payload = json!({
        "name": "Backwards Trip",
        "region": "Krabi",
        "duration_nights": 2,
        "days": [
            { "day_number": 3 },
            { "day_number": 1 },
            { "day_number": 2 }
        ]
    });

    let (status, created) = common::post_json(&app, "/itineraries/", payload).await;
    assert_eq!(status, StatusCode::CREATED);

    let numbers: Vec<i64> = created["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["day_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_create_rejects_duplicate_day_numbers() {
    let app = common::spawn_app(true).await;

    let payload = json!({
        "name": "Broken Trip",
        "region": "Phuket",
        "duration_nights": 2,
        "days": [
            { "day_number": 1 },
            { "day_number": 1 }
        ]
    });

    let (status, body) = common::post_json(&app, "/itineraries/", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Duplicate day number"));
}

#[tokio::test]
async fn test_create_rejects_unknown_accommodation() {
    let app = common::spawn_app(true).await;

    let payload = json!({
        "name": "Ghost Hotel Trip",
        "region": "Phuket",
        "duration_nights": 1,
        "days": [
            { "day_number": 1, "accommodation_id": 9999 }
        ]
    });

    let (status, body) = common::post_json(&app, "/itineraries/", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("9999"));

    // Nothing was persisted
    let (_, list) = common::get(&app, "/itineraries/").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_rejects_non_positive_duration() {
    let app = common::spawn_app(false).await;

    let payload = json!({
        "name": "Zero Night Trip",
        "region": "Krabi",
        "duration_nights": 0,
        "days": []
    });

    let (status, body) = common::post_json(&app, "/itineraries/", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "duration_nights");
}

#[tokio::test]
async fn test_get_unknown_itinerary_not_found() {
    let app = common::spawn_app(false).await;

    let (status, body) = common::get(&app, "/itineraries/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Itinerary not found");
}

#[tokio::test]
async fn test_list_returns_creation_order() {
    let app = common::spawn_app(false).await;

    let first = json!({
        "name": "First Trip",
        "region": "Phuket",
        "duration_nights": 3,
        "days": []
    });
    let second = json!({
        "name": "Second Trip",
        "region": "Krabi",
        "duration_nights": 4,
        "days": []
    });

    let (status, _) = common::post_json(&app, "/itineraries/", first).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = common::post_json(&app, "/itineraries/", second).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = common::get(&app, "/itineraries/").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First Trip", "Second Trip"]);
}
