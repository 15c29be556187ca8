//! Root welcome endpoint.

use actix_web::{HttpResponse, get};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WelcomeBody {
    message: &'static str,
}

/// Greets callers probing the service root.
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeBody { message: "welcome" })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn root_returns_a_welcome_message() {
        let app = actix_test::init_service(App::new().service(welcome)).await;

        let request = actix_test::TestRequest::get().uri("/").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("valid JSON body");
        assert_eq!(value.get("message").and_then(Value::as_str), Some("welcome"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_through() {
        let app = actix_test::init_service(App::new().service(welcome)).await;

        let request = actix_test::TestRequest::get().uri("/nonexistent").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
