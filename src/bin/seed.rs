use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itinerary_backend::{config::Config, db, seed};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itinerary_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let db = db::connect(&config)
        .await
        .expect("Failed to connect to database");

    seed::reseed(&db).await.expect("Failed to seed database");
}
