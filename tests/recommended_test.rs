mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_duration_out_of_range_is_rejected() {
    let app = common::spawn_app(true).await;

    for duration in [0, 1, 9, 100] {
        let uri = format!("/itineraries/recommended/?duration={}", duration);
        let (status, body) = common::get(&app, &uri).await;
        assert_eq!(
            status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "duration {} should be rejected",
            duration
        );
        assert_eq!(body["field"], "duration");
    }
}

#[tokio::test]
async fn test_missing_duration_is_rejected() {
    let app = common::spawn_app(true).await;

    let (status, _) = common::get(&app, "/itineraries/recommended/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duration_five_returns_only_five_night_plans() {
    let app = common::spawn_app(true).await;

    let (status, body) = common::get(&app, "/itineraries/recommended/?duration=5").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row["duration_nights"], 5);
    }
}

#[tokio::test]
async fn test_one_recommended_per_region_and_duration() {
    let app = common::spawn_app(true).await;

    for duration in 2..=8 {
        let uri = format!("/itineraries/recommended/?duration={}", duration);
        let (status, body) = common::get(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);

        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2, "duration {}", duration);

        let regions: Vec<&str> = rows
            .iter()
            .map(|r| r["region"].as_str().unwrap())
            .collect();
        assert!(regions.contains(&"Phuket"));
        assert!(regions.contains(&"Krabi"));
    }
}

#[tokio::test]
async fn test_plan_days_cover_every_night() {
    let app = common::spawn_app(true).await;

    let (status, body) = common::get(&app, "/itineraries/recommended/?duration=3").await;
    assert_eq!(status, StatusCode::OK);

    for row in body.as_array().unwrap() {
        let days = row["days"].as_array().unwrap();
        // One day per night plus the departure day
        assert_eq!(days.len(), 4);

        let numbers: Vec<i64> = days
            .iter()
            .map(|d| d["day_number"].as_i64().unwrap())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}

#[tokio::test]
async fn test_reseed_clears_and_repopulates() {
    let app = common::spawn_app(true).await;

    // Second seeding pass must not duplicate rows
    itinerary_backend::seed::reseed(&app.db).await.unwrap();

    for duration in 2..=8 {
        let uri = format!("/itineraries/recommended/?duration={}", duration);
        let (status, body) = common::get(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2, "duration {}", duration);
    }
}
