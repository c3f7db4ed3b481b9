use chefkit_service::database::MongoDB;
use chefkit_service::seeds::meal_kits_seed;
use dotenv::dotenv;
use std::env;

/// One-shot maintenance tool: wipes the mealKits collection and loads the
/// demo catalog. Never invoked by the API service.
#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🌱 ChefKit seed loader starting...");

    let db = match MongoDB::new(&database_url).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("✅ Connected to MongoDB");

    let outcome = meal_kits_seed::run(&db).await;

    // Close the connection unconditionally so the process exits cleanly
    db.client().clone().shutdown().await;
    log::info!("🔌 Connection closed");

    match outcome {
        Ok(report) => {
            log::info!("✅ {} meal kits inserted successfully!", report.inserted);
            log::info!("📊 Total meal kits in database: {}", report.total);
        }
        Err(e) => {
            log::error!("❌ Error seeding data: {}", e);
            std::process::exit(1);
        }
    }
}
