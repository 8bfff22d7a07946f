use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::payment::{Payment, RecordId};

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum StorageError {
	#[display("not found")]
	NotFound,
	#[display("{message}")]
	Database { message: String },
}

impl StorageError {
	pub fn database(message: impl Into<String>) -> Self {
		StorageError::Database {
			message: message.into(),
		}
	}
}

/// Storage for payment records.
///
/// Every call stands alone: nothing is held between calls and no call
/// is retried.
#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	async fn list_all(&self) -> Result<Vec<Payment>, StorageError>;

	async fn get_by_id(&self, record_id: RecordId)
	-> Result<Payment, StorageError>;

	/// Stores `payment` under a freshly generated identifier. Any
	/// identifier already on `payment` is ignored.
	async fn create(&self, payment: Payment) -> Result<Payment, StorageError>;

	async fn delete(&self, record_id: RecordId) -> Result<(), StorageError>;

	/// Replaces the whole record named by `payment.record_id` and returns
	/// what was stored.
	async fn update(&self, payment: Payment) -> Result<Payment, StorageError>;
}
