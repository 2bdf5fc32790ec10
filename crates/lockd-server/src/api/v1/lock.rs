//! V1 lock API handlers
//!
//! Implements the lock endpoint:
//! - GET /v1/lock - acquire, renew, or release a named lock
//! - POST /v1/lock - the same operation with form-encoded parameters
//!
//! The endpoint always answers 200 with a JSON body for decided
//! requests; `acquired` tells grant from denial, and `lock` carries the
//! row as it now stands. Missing or malformed parameters answer 400
//! with a plain text message.

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use tracing::warn;

use lockd_api::model::{Lock, LockResult};
use lockd_api::validation::{
    parse_duration_millis, parse_unlock_token, validate_lock_key, validate_lock_owner,
};
use lockd_core::LockRequest;

use crate::metrics::{Timer, record_lock_error, record_lock_request};
use crate::model::AppState;

use super::model::LockParam;

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

fn server_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

fn validation_message(error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Shared implementation behind the GET and POST routes
async fn handle_lock(data: web::Data<AppState>, param: LockParam) -> HttpResponse {
    let key = param.key.unwrap_or_default();
    if let Err(e) = validate_lock_key(&key) {
        record_lock_error("validation");
        return bad_request(validation_message(&e));
    }

    let owner = param.owner.unwrap_or_default();
    if let Err(e) = validate_lock_owner(&owner) {
        record_lock_error("validation");
        return bad_request(validation_message(&e));
    }

    let unlock = param.unlock.as_deref().filter(|v| !v.is_empty());
    let duration = param.duration.as_deref().filter(|v| !v.is_empty());

    // A request carries either an unlock token or a duration. The token
    // wins when both are present; the duration is not even parsed then.
    let (operation, duration_millis, unlock_token) = match unlock {
        Some(raw) => match parse_unlock_token(raw) {
            Ok(token) => ("release", 0, Some(token)),
            Err(e) => {
                record_lock_error("validation");
                return bad_request(validation_message(&e));
            }
        },
        None => match duration {
            Some(raw) => match parse_duration_millis(raw) {
                Ok(millis) => ("acquire", millis, None),
                Err(e) => {
                    record_lock_error("validation");
                    return bad_request(validation_message(&e));
                }
            },
            None => {
                record_lock_error("validation");
                return bad_request("duration is missing.".to_string());
            }
        },
    };

    let timer = Timer::new();
    let request = LockRequest {
        key,
        owner,
        duration_millis,
        unlock_token,
    };

    match data.lock_service().try_lock(request).await {
        Ok(outcome) => {
            record_lock_request(operation, outcome.acquired, timer.elapsed_secs());
            HttpResponse::Ok().json(LockResult {
                acquired: outcome.acquired,
                lock: Lock {
                    owner: outcome.record.owner,
                    lock_time: outcome.record.lock_until,
                    modified_time: outcome.record.modified_time,
                },
            })
        }
        Err(e) => {
            warn!(error = %e, "Failed to lock");
            record_lock_error("storage");
            server_error(format!("Failed to lock: {:#}", e))
        }
    }
}

/// Acquire, renew, or release a named lock
///
/// GET /v1/lock
#[get("")]
pub async fn try_lock_get(
    data: web::Data<AppState>,
    params: web::Query<LockParam>,
) -> impl Responder {
    handle_lock(data, params.into_inner()).await
}

/// Acquire, renew, or release a named lock
///
/// POST /v1/lock
#[post("")]
pub async fn try_lock_post(
    data: web::Data<AppState>,
    params: web::Form<LockParam>,
) -> impl Responder {
    handle_lock(data, params.into_inner()).await
}

pub fn routes() -> Scope {
    web::scope("/v1/lock")
        .service(try_lock_get)
        .service(try_lock_post)
}
