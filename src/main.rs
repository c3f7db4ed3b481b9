use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use chefkit_service::{api, database};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting ChefKit Service...");

    // Initialize MongoDB connection (fail fast if the cluster is unreachable)
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000") // Frontend Web
            .allowed_origin("http://localhost:5000")
            .allowed_origin("https://chefkit-client-side.vercel.app")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness probe
            .route("/", web::get().to(api::health::server_status))
            // User endpoints
            .route("/users", web::get().to(api::users::get_users))
            .route("/users", web::post().to(api::users::create_user))
            .route("/users/{email}", web::get().to(api::users::get_user))
            // Meal kit endpoints
            .route("/meal-kits", web::get().to(api::meal_kits::get_meal_kits))
            .route("/meal-kits", web::post().to(api::meal_kits::create_meal_kit))
            .route("/meal-kits/{id}", web::get().to(api::meal_kits::get_meal_kit))
            .route("/meal-kits/{id}", web::put().to(api::meal_kits::update_meal_kit))
            .route("/meal-kits/{id}", web::delete().to(api::meal_kits::delete_meal_kit))
            // Meal kits owned by a given user
            .route("/my-meal-kits/{email}", web::get().to(api::meal_kits::get_my_meal_kits))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
