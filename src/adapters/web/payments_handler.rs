use actix_web::{HttpResponse, delete, get, post, put, web};
use log::{debug, info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::response::send_json;
use crate::adapters::web::schema::{
	DELETED_STATUS, EMPTY_COLLECTION_STATUS, StatusEnvelope,
};
use crate::domain::payment::{Payment, RecordId};
use crate::domain::repository::{PaymentRepository, StorageError};

type Repository = web::Data<dyn PaymentRepository>;

/// Bodies are decoded whatever their declared content type.
fn decode_payment(body: &[u8]) -> Result<Payment, ApiError> {
	serde_json::from_slice(body).map_err(|e| {
		warn!("Rejecting undecodable payment body: {e}");
		ApiError::decode(e)
	})
}

/// A malformed id cannot name a stored record.
fn parse_record_id(raw: &str) -> Result<RecordId, ApiError> {
	raw.parse().map_err(|e| {
		debug!("Payment id {raw:?} is not a record id: {e}");
		ApiError::from(StorageError::NotFound)
	})
}

fn log_storage_error(operation: &str, error: &StorageError) {
	match error {
		StorageError::NotFound => info!("{operation}: payment not found"),
		StorageError::Database { message } => warn!("{operation} failed: {message}"),
	}
}

#[get("/payments")]
pub async fn list_payments(
	repository: Repository,
) -> Result<HttpResponse, ApiError> {
	info!("Listing payments");
	let payments = repository
		.list_all()
		.await
		.inspect_err(|e| log_storage_error("List payments", e))?;

	if payments.is_empty() {
		return Ok(send_json(&StatusEnvelope::new(EMPTY_COLLECTION_STATUS)));
	}

	debug!("Found {} payments", payments.len());
	Ok(send_json(&payments))
}

#[get("/payments/{id}")]
pub async fn get_payment(
	id: web::Path<String>,
	repository: Repository,
) -> Result<HttpResponse, ApiError> {
	info!("Getting payment {id}");
	let record_id = parse_record_id(&id)?;
	let payment = repository
		.get_by_id(record_id)
		.await
		.inspect_err(|e| log_storage_error("Get payment", e))?;

	Ok(send_json(&payment))
}

#[post("/payments")]
pub async fn create_payment(
	body: web::Bytes,
	repository: Repository,
) -> Result<HttpResponse, ApiError> {
	info!("Creating payment");
	let payment = decode_payment(&body)?;
	let created = repository
		.create(payment)
		.await
		.inspect_err(|e| log_storage_error("Create payment", e))?;

	if let Some(record_id) = created.record_id {
		info!("Created payment {record_id}");
	}
	Ok(send_json(&created))
}

#[put("/payments/{id}")]
pub async fn update_payment(
	id: web::Path<String>,
	body: web::Bytes,
	repository: Repository,
) -> Result<HttpResponse, ApiError> {
	info!("Updating payment {id}");
	let mut payment = decode_payment(&body)?;
	payment.record_id = Some(parse_record_id(&id)?);

	let updated = repository
		.update(payment)
		.await
		.inspect_err(|e| log_storage_error("Update payment", e))?;

	Ok(send_json(&updated))
}

#[delete("/payments/{id}")]
pub async fn delete_payment(
	id: web::Path<String>,
	repository: Repository,
) -> Result<HttpResponse, ApiError> {
	info!("Deleting payment {id}");
	let record_id = parse_record_id(&id)?;
	repository
		.delete(record_id)
		.await
		.inspect_err(|e| log_storage_error("Delete payment", e))?;

	Ok(send_json(&StatusEnvelope::new(DELETED_STATUS)))
}
