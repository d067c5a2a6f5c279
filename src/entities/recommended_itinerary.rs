use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::region::Region;

/// Recommended plans are pre-seeded for durations in this range only.
pub const MIN_DURATION_NIGHTS: i32 = 2;
pub const MAX_DURATION_NIGHTS: i32 = 8;

/// Pre-seeded itinerary template, selectable by trip duration. Independent of
/// user-created itineraries; written only by the seed step.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recommended_itinerary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub region: Region,
    pub duration_nights: i32,
    pub plan: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// One day of a recommended plan, stored serialized in the `plan` column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_number: i32,
    pub summary: String,
    pub accommodation: Option<String>,
    pub activities: Vec<String>,
    pub transfers: Vec<String>,
}
