use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::database::MongoDB;
use crate::models::User;
use crate::services::user_service::{self, CreateUserOutcome};
use crate::utils::error::AppError;

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users (empty array when the database is unavailable)")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("👥 GET /users - Listing all users");

    match user_service::get_all_users(&db).await {
        Ok(users) => {
            log::info!("✅ Users retrieved: {}", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            // Read path degrades to an empty list instead of failing the caller
            log::error!("❌ Error fetching users: {}", e);
            HttpResponse::Ok().json(json!([]))
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User inserted, or already-exists notice"),
        (status = 503, description = "Database not ready"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(db: web::Data<MongoDB>, body: web::Json<User>) -> HttpResponse {
    let user = body.into_inner();
    log::info!("👥 POST /users - Registering {}", user.email);

    match user_service::create_user(&db, &user).await {
        Ok(CreateUserOutcome::AlreadyExists) => {
            log::info!("ℹ️  User {} already exists - skipping insert", user.email);
            HttpResponse::Ok().json(json!({ "message": "User already exists" }))
        }
        Ok(CreateUserOutcome::Created(result)) => {
            log::info!("✅ User {} created", user.email);
            let inserted_id = result
                .inserted_id
                .as_object_id()
                .map(|oid| oid.to_hex())
                .unwrap_or_else(|| result.inserted_id.to_string());
            HttpResponse::Ok().json(json!({
                "acknowledged": true,
                "insertedId": inserted_id,
            }))
        }
        Err(AppError::Unavailable(msg)) => {
            log::error!("❌ Database not ready: {}", msg);
            HttpResponse::ServiceUnavailable().json(json!({ "message": "Database not ready" }))
        }
        Err(e) => {
            log::error!("❌ Error in users endpoint: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({ "message": "Error processing user request" }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email the user registered with")
    ),
    responses(
        (status = 200, description = "User document, or null when no user matches"),
        (status = 503, description = "Database not ready"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("👥 GET /users/{}", email);

    match user_service::get_user_by_email(&db, &email).await {
        // Missing user serializes as null, matching what the frontend expects
        Ok(user) => HttpResponse::Ok().json(user),
        Err(AppError::Unavailable(msg)) => {
            log::error!("❌ Database not ready: {}", msg);
            HttpResponse::ServiceUnavailable().json(json!({ "message": "Database not ready" }))
        }
        Err(e) => {
            log::error!("❌ Error fetching user {}: {}", email, e);
            HttpResponse::InternalServerError().json(json!({ "message": "Error fetching user" }))
        }
    }
}
