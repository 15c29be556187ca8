//! Signup API handlers.
//!
//! ```text
//! POST /signup {"email":"ada@example.com","first_name":"Ada","last_name":"Lovelace"}
//! ```
//!
//! The POST handler is the single terminal step of the signup pipeline: it
//! reads the body under a fixed size bound, decodes it, runs validation,
//! drives the registration service, and builds exactly one response. The
//! response status is captured once and handed to the metrics port, so the
//! counters always agree with what the client saw. Any other method on the
//! resource lands in the method-not-allowed default route, which reports
//! through the same sink.

use actix_web::{FromRequest, HttpRequest, HttpResponse, Resource, ResponseError, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::SignupOutcomeLabels;
use crate::domain::{Error, SignupDetails, SignupValidationError, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Upper bound in bytes on a signup request body. Payloads carry an email
/// and two names, so anything near this size is junk.
const MAX_SIGNUP_BODY_BYTES: usize = 64 * 1024;

/// Signup request body for `POST /signup`.
///
/// Absent fields decode as empty strings so that presence failures surface
/// as the validator's required-field messages rather than decode errors.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl TryFrom<SignupRequest> for SignupDetails {
    type Error = SignupValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.first_name, &value.last_name)
    }
}

/// Success body for a created user.
#[derive(Debug, Serialize)]
struct SignupCreated {
    message: &'static str,
    user: User,
}

/// The `/signup` resource: POST runs the pipeline, everything else is
/// answered by the method-not-allowed default route.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use signup_service::inbound::http::signup::signup_resource;
///
/// App::new().service(signup_resource());
/// ```
pub fn signup_resource() -> Resource {
    web::resource("/signup")
        .app_data(web::PayloadConfig::new(MAX_SIGNUP_BODY_BYTES))
        .route(web::post().to(signup))
        .default_service(web::route().to(signup_method_not_allowed))
}

/// Register a new account.
pub async fn signup(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Payload,
) -> HttpResponse {
    let response = match process(&state, &req, payload).await {
        Ok(user) => HttpResponse::Created().json(SignupCreated {
            message: "user created successfully",
            user,
        }),
        Err(error) => error.error_response(),
    };
    record_outcome(&state, &req, &response);
    response
}

/// Answer any non-POST method on the resource.
pub async fn signup_method_not_allowed(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> HttpResponse {
    let response = Error::method_not_allowed("method not allowed").error_response();
    record_outcome(&state, &req, &response);
    response
}

/// Read, decode, validate, and register. The body is read here rather than
/// by an extractor parameter so oversized and malformed payloads stay inside
/// the pipeline and get counted like every other terminal state.
async fn process(state: &HttpState, req: &HttpRequest, payload: web::Payload) -> ApiResult<User> {
    let mut raw = payload.into_inner();
    let body = web::Bytes::from_request(req, &mut raw)
        .await
        .map_err(|_| Error::invalid_request("invalid request body"))?;
    let payload: SignupRequest = serde_json::from_slice(&body)
        .map_err(|_| Error::invalid_request("invalid request body"))?;
    let details = SignupDetails::try_from(payload).map_err(map_signup_validation_error)?;
    state.registration.register(&details).await
}

fn map_signup_validation_error(err: SignupValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

/// Record one increment pair from the status the response actually carries.
fn record_outcome(state: &HttpState, req: &HttpRequest, response: &HttpResponse) {
    state.metrics.record_outcome(&SignupOutcomeLabels {
        method: req.method().as_str().to_owned(),
        status_code: response.status().as_u16(),
    });
}
