use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::region::Region;

/// Catalog of places to stay. Rows are written by the seed step only and
/// referenced (never owned) by itinerary days.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accommodation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub region: Region,
    pub location: String,
    pub kind: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::day::Entity")]
    Days,
}

impl Related<super::day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Days.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
