pub use sea_orm_migration::prelude::*;

mod m20250710_000001_create_accommodations;
mod m20250710_000002_create_itineraries;
mod m20250710_000003_create_days;
mod m20250710_000004_create_activities;
mod m20250710_000005_create_transfers;
mod m20250710_000006_create_recommended_itineraries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250710_000001_create_accommodations::Migration),
            Box::new(m20250710_000002_create_itineraries::Migration),
            Box::new(m20250710_000003_create_days::Migration),
            Box::new(m20250710_000004_create_activities::Migration),
            Box::new(m20250710_000005_create_transfers::Migration),
            Box::new(m20250710_000006_create_recommended_itineraries::Migration),
        ]
    }
}
