use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::adapters::web::response::send_json_with_status;
use crate::adapters::web::schema::StatusEnvelope;
use crate::domain::repository::StorageError;

#[derive(Debug, Display, Error)]
pub enum ApiError {
	/// Request body is not a structurally valid payment.
	#[display("{message}")]
	Decode { message: String },
	#[display("{source}")]
	Storage { source: StorageError },
}

impl ApiError {
	pub fn decode(err: serde_json::Error) -> Self {
		ApiError::Decode {
			message: err.to_string(),
		}
	}
}

impl From<StorageError> for ApiError {
	fn from(source: StorageError) -> Self {
		ApiError::Storage { source }
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		send_json_with_status(
			self.status_code(),
			&StatusEnvelope::new(self.to_string()),
		)
	}

	// Storage failures, not-found included, go out as 200 with a status
	// envelope. Clients depend on this.
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Decode { .. } => StatusCode::BAD_REQUEST,
			ApiError::Storage { .. } => StatusCode::OK,
		}
	}
}
