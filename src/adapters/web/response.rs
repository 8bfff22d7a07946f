use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, ContentType};
use log::error;
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error.";

/// Writes `data` as JSON with `status`. When `data` cannot be serialized
/// the payload is dropped and a plain-text 500 is sent instead.
pub fn send_json_with_status<T: Serialize + ?Sized>(
	status: StatusCode,
	data: &T,
) -> HttpResponse {
	match serde_json::to_vec(data) {
		Ok(body) => HttpResponse::build(status)
			.insert_header((CONTENT_TYPE, JSON_CONTENT_TYPE))
			.body(body),
		Err(e) => {
			error!("Error marshalling response: {e}");
			HttpResponse::InternalServerError()
				.content_type(ContentType::plaintext())
				.body(INTERNAL_SERVER_ERROR_MESSAGE)
		}
	}
}

pub fn send_json<T: Serialize + ?Sized>(data: &T) -> HttpResponse {
	send_json_with_status(StatusCode::OK, data)
}
