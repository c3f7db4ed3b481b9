use actix_web::{web, HttpResponse};
use mongodb::bson::to_document;
use serde::Deserialize;
use serde_json::json;

use crate::database::MongoDB;
use crate::services::meal_kit_service;
use crate::utils::error::AppError;

#[derive(Deserialize)]
pub struct MealKitListQuery {
    pub cuisine: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

#[utoipa::path(
    get,
    path = "/meal-kits",
    tag = "MealKits",
    params(
        ("cuisine" = Option<String>, Query, description = "Exact cuisine filter; \"All\" disables it"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on title, chef or cuisine"),
        ("sort" = Option<String>, Query, description = "price-asc | price-desc | newest")
    ),
    responses(
        (status = 200, description = "Meal kits matching the filters (empty array on database errors)")
    )
)]
pub async fn get_meal_kits(
    db: web::Data<MongoDB>,
    query: web::Query<MealKitListQuery>,
) -> HttpResponse {
    log::info!(
        "🥘 GET /meal-kits - cuisine: {:?}, search: {:?}, sort: {:?}",
        query.cuisine,
        query.search,
        query.sort
    );

    match meal_kit_service::list_meal_kits(
        &db,
        query.cuisine.as_deref(),
        query.search.as_deref(),
        query.sort.as_deref(),
    )
    .await
    {
        Ok(kits) => {
            log::info!("✅ Meal kits retrieved: {}", kits.len());
            HttpResponse::Ok().json(kits)
        }
        Err(e) => {
            // Read path degrades to an empty list instead of failing the caller
            log::error!("❌ Error fetching meal kits: {}", e);
            HttpResponse::Ok().json(json!([]))
        }
    }
}

#[utoipa::path(
    get,
    path = "/meal-kits/{id}",
    tag = "MealKits",
    params(
        ("id" = String, Path, description = "Application-level meal kit id (not the Mongo _id)")
    ),
    responses(
        (status = 200, description = "Meal kit document"),
        (status = 404, description = "Meal kit not found"),
        (status = 503, description = "Database not ready"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_meal_kit(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🥘 GET /meal-kits/{}", id);

    match meal_kit_service::get_meal_kit_by_id(&db, &id).await {
        Ok(kit) => HttpResponse::Ok().json(kit),
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ Meal kit {} not found", id);
            HttpResponse::NotFound().json(json!({ "message": "Meal kit not found" }))
        }
        Err(AppError::Unavailable(msg)) => {
            log::error!("❌ Database not ready: {}", msg);
            HttpResponse::ServiceUnavailable().json(json!({ "message": "Database not ready" }))
        }
        Err(e) => {
            log::error!("❌ Error fetching meal kit {}: {}", id, e);
            HttpResponse::InternalServerError()
                .json(json!({ "message": "Error fetching meal kit" }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/meal-kits",
    tag = "MealKits",
    request_body = crate::models::MealKit,
    responses(
        (status = 200, description = "Created; returns the inserted database id"),
        (status = 503, description = "Database not ready"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_meal_kit(
    db: web::Data<MongoDB>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    log::info!("🥘 POST /meal-kits request received");

    // The body is stored as-is; only `id` and `createdAt` are server-stamped
    let kit = match to_document(&body.into_inner()) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("❌ Error adding meal kit: {}", e);
            return HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Error adding meal kit",
                "error": e.to_string(),
            }));
        }
    };

    match meal_kit_service::create_meal_kit(&db, kit).await {
        Ok(result) => {
            let inserted_id = result
                .inserted_id
                .as_object_id()
                .map(|oid| oid.to_hex())
                .unwrap_or_else(|| result.inserted_id.to_string());
            log::info!("✅ Meal kit inserted successfully: {}", inserted_id);
            HttpResponse::Ok().json(json!({
                "success": true,
                "insertedId": inserted_id,
            }))
        }
        Err(AppError::Unavailable(msg)) => {
            log::error!("❌ Database not ready: {}", msg);
            HttpResponse::ServiceUnavailable().json(json!({ "message": "Database not ready" }))
        }
        Err(e) => {
            log::error!("❌ Error adding meal kit: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Error adding meal kit",
                "error": e.to_string(),
            }))
        }
    }
}

#[utoipa::path(
    put,
    path = "/meal-kits/{id}",
    tag = "MealKits",
    params(
        ("id" = String, Path, description = "Application-level meal kit id")
    ),
    responses(
        (status = 200, description = "Raw update result; a non-matching id reports zero modified"),
        (status = 503, description = "Database not ready"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_meal_kit(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🥘 PUT /meal-kits/{}", id);

    let fields = match to_document(&body.into_inner()) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("❌ Error updating meal kit {}: {}", id, e);
            return HttpResponse::InternalServerError()
                .json(json!({ "message": "Error updating meal kit" }));
        }
    };

    match meal_kit_service::update_meal_kit(&db, &id, fields).await {
        Ok(result) => HttpResponse::Ok().json(json!({
            "acknowledged": true,
            "matchedCount": result.matched_count,
            "modifiedCount": result.modified_count,
            "upsertedId": result.upserted_id,
            "upsertedCount": if result.upserted_id.is_some() { 1 } else { 0 },
        })),
        Err(AppError::Unavailable(msg)) => {
            log::error!("❌ Database not ready: {}", msg);
            HttpResponse::ServiceUnavailable().json(json!({ "message": "Database not ready" }))
        }
        Err(e) => {
            log::error!("❌ Error updating meal kit {}: {}", id, e);
            HttpResponse::InternalServerError()
                .json(json!({ "message": "Error updating meal kit" }))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/meal-kits/{id}",
    tag = "MealKits",
    params(
        ("id" = String, Path, description = "Application-level meal kit id")
    ),
    responses(
        (status = 200, description = "Raw delete result; a non-matching id reports zero deleted"),
        (status = 503, description = "Database not ready"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_meal_kit(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🥘 DELETE /meal-kits/{}", id);

    match meal_kit_service::delete_meal_kit(&db, &id).await {
        Ok(result) => HttpResponse::Ok().json(json!({
            "acknowledged": true,
            "deletedCount": result.deleted_count,
        })),
        Err(AppError::Unavailable(msg)) => {
            log::error!("❌ Database not ready: {}", msg);
            HttpResponse::ServiceUnavailable().json(json!({ "message": "Database not ready" }))
        }
        Err(e) => {
            log::error!("❌ Error deleting meal kit {}: {}", id, e);
            HttpResponse::InternalServerError()
                .json(json!({ "message": "Error deleting meal kit" }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/my-meal-kits/{email}",
    tag = "MealKits",
    params(
        ("email" = String, Path, description = "Owning user's email")
    ),
    responses(
        (status = 200, description = "Meal kits owned by the user (empty array on database errors)")
    )
)]
pub async fn get_my_meal_kits(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("🥘 GET /my-meal-kits/{}", email);

    match meal_kit_service::list_meal_kits_by_user_email(&db, &email).await {
        Ok(kits) => {
            log::info!("✅ Meal kits for {}: {}", email, kits.len());
            HttpResponse::Ok().json(kits)
        }
        Err(e) => {
            log::error!("❌ Error fetching user meal kits: {}", e);
            HttpResponse::Ok().json(json!([]))
        }
    }
}
