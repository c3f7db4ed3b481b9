use actix_web::{HttpResponse, Responder};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub message: String,
    pub timestamp: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    )
)]
pub async fn server_status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        message: "ChefKit server is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: "OK".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn server_status_reports_ok() {
        let app =
            test::init_service(App::new().route("/", web::get().to(server_status))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: StatusResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "OK");
        assert_eq!(body.message, "ChefKit server is running");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}
