//! One-shot seed data loading. Reseeding drops every table first, so prior
//! user-created itineraries are discarded along with old seed rows.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::entities::Region;
use crate::entities::recommended_itinerary::{
    self, DayPlan, MAX_DURATION_NIGHTS, MIN_DURATION_NIGHTS,
};
use crate::entities::accommodation;

/// Drop and recreate all tables, then insert the sample catalog and one
/// recommended itinerary per (region, duration) pair for durations 2-8.
pub async fn reseed(db: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::info!("Dropping and recreating database tables");
    Migrator::fresh(db).await?;

    seed_accommodations(db).await?;
    seed_recommended(db).await?;

    tracing::info!("Database seeding complete");
    Ok(())
}

async fn seed_accommodations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let rows = [
        (
            Region::Phuket,
            "Phuket Marriott Resort & Spa, Merlin Beach",
            "Patong, Phuket",
            "Resort",
            5,
        ),
        (
            Region::Phuket,
            "Casa Blanca Boutique Hotel",
            "Phuket Town, Phuket",
            "Hotel",
            4,
        ),
        (
            Region::Phuket,
            "Katathani Phuket Beach Resort",
            "Kata Noi Beach, Phuket",
            "Resort",
            5,
        ),
        (
            Region::Krabi,
            "Centara Ao Nang Beach Resort & Spa",
            "Ao Nang, Krabi",
            "Resort",
            4,
        ),
        (Region::Krabi, "Rayavadee", "Railay Beach, Krabi", "Resort", 5),
        (
            Region::Krabi,
            "Dusit Thani Krabi Beach Resort",
            "Klong Muang Beach, Krabi",
            "Resort",
            5,
        ),
    ];

    for (region, name, location, kind, rating) in rows {
        accommodation::ActiveModel {
            name: Set(name.to_string()),
            region: Set(region),
            location: Set(location.to_string()),
            kind: Set(Some(kind.to_string())),
            rating: Set(Some(rating)),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::info!("Seeded {} accommodations", rows.len());
    Ok(())
}

async fn seed_recommended(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut count = 0;
    for region in [Region::Phuket, Region::Krabi] {
        for nights in MIN_DURATION_NIGHTS..=MAX_DURATION_NIGHTS {
            let plan = build_plan(region, nights);
            let plan_json = serde_json::to_value(&plan)
                .map_err(|e| DbErr::Custom(format!("Failed to serialize plan: {}", e)))?;

            recommended_itinerary::ActiveModel {
                name: Set(format!("{} {} ({} Nights)", region, theme(nights), nights)),
                region: Set(region),
                duration_nights: Set(nights),
                plan: Set(plan_json),
                ..Default::default()
            }
            .insert(db)
            .await?;
            count += 1;
        }
    }

    tracing::info!("Seeded {} recommended itineraries", count);
    Ok(())
}

struct RegionContent {
    hotel: &'static str,
    arrival_transfer: &'static str,
    departure_transfer: &'static str,
    activities: [&'static str; 7],
}

fn content(region: Region) -> RegionContent {
    match region {
        Region::Phuket => RegionContent {
            hotel: "Phuket Marriott Resort & Spa, Merlin Beach",
            arrival_transfer: "Phuket Airport to Hotel Transfer",
            departure_transfer: "Phuket Hotel to Airport Transfer",
            activities: [
                "Phi Phi Islands Day Tour",
                "Visit Big Buddha & Wat Chalong",
                "Explore Phuket Old Town",
                "James Bond Island (Phang Nga Bay) Tour",
                "Thai Cooking Class",
                "Phuket FantaSea Show",
                "Similan Islands Day Trip",
            ],
        },
        Region::Krabi => RegionContent {
            hotel: "Centara Ao Nang Beach Resort & Spa",
            arrival_transfer: "Krabi Airport to Hotel Transfer",
            departure_transfer: "Krabi Hotel to Airport Transfer",
            activities: [
                "Krabi 4 Islands Tour",
                "Relax at Railay Beach",
                "Sea Kayaking in Ao Thalane",
                "Thai Cooking Class",
                "Hot Springs & Emerald Pool Tour",
                "Tiger Cave Temple Hike",
                "James Bond Island (Phang Nga Bay) Tour",
            ],
        },
    }
}

fn theme(nights: i32) -> &'static str {
    match nights {
        2 => "Quick Escape",
        3 => "Explorer",
        4 => "Castaway",
        5 => "Discovery",
        6 => "Relaxation",
        7 => "Adventure",
        _ => "Ultimate",
    }
}

/// Build the day-by-day plan for one recommended itinerary: arrival transfer
/// on day 1, one activity per middle day, departure on day nights+1.
fn build_plan(region: Region, nights: i32) -> Vec<DayPlan> {
    let content = content(region);
    let mut days = Vec::with_capacity(nights as usize + 1);

    days.push(DayPlan {
        day_number: 1,
        summary: format!("Arrive in {}, transfer to the hotel.", region),
        accommodation: Some(content.hotel.to_string()),
        activities: Vec::new(),
        transfers: vec![content.arrival_transfer.to_string()],
    });

    for day in 2..=nights {
        let activity = content.activities[(day - 2) as usize % content.activities.len()];
        days.push(DayPlan {
            day_number: day,
            summary: activity.to_string(),
            accommodation: Some(content.hotel.to_string()),
            activities: vec![activity.to_string()],
            transfers: Vec::new(),
        });
    }

    days.push(DayPlan {
        day_number: nights + 1,
        summary: format!("Departure from {}.", region),
        accommodation: None,
        activities: Vec::new(),
        transfers: vec![content.departure_transfer.to_string()],
    });

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_one_day_per_night_plus_departure() {
        for nights in MIN_DURATION_NIGHTS..=MAX_DURATION_NIGHTS {
            let plan = build_plan(Region::Phuket, nights);
            assert_eq!(plan.len(), nights as usize + 1);

            let numbers: Vec<i32> = plan.iter().map(|d| d.day_number).collect();
            assert_eq!(numbers, (1..=nights + 1).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_plan_arrival_and_departure_shape() {
        let plan = build_plan(Region::Krabi, 4);

        let first = plan.first().unwrap();
        assert_eq!(first.transfers.len(), 1);
        assert!(first.accommodation.is_some());
        assert!(first.activities.is_empty());

        let last = plan.last().unwrap();
        assert_eq!(last.transfers.len(), 1);
        assert!(last.accommodation.is_none());
        assert!(last.activities.is_empty());
    }

    #[test]
    fn test_middle_days_each_have_an_activity() {
        let plan = build_plan(Region::Krabi, 5);
        for day in &plan[1..5] {
            assert_eq!(day.activities.len(), 1);
            assert!(day.accommodation.is_some());
        }
    }
}
