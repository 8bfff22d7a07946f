use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use payments_api::domain::payment::{Payment, RecordId};
use payments_api::domain::repository::{PaymentRepository, StorageError};

pub const DB_ERROR: &str = "database error";

/// In-memory stand-in for the MongoDB repository. When `failing` is set,
/// every call fails with [`DB_ERROR`].
#[derive(Clone, Default)]
pub struct StubPaymentRepository {
	payments: Arc<Mutex<Vec<Payment>>>,
	failing:  bool,
}

impl StubPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_payments(payments: Vec<Payment>) -> Self {
		Self {
			payments: Arc::new(Mutex::new(payments)),
			failing:  false,
		}
	}

	pub fn failing() -> Self {
		Self {
			payments: Arc::default(),
			failing:  true,
		}
	}

	pub fn stored(&self) -> Vec<Payment> {
		self.payments.lock().unwrap().clone()
	}

	fn check(&self) -> Result<(), StorageError> {
		if self.failing {
			return Err(StorageError::database(DB_ERROR));
		}
		Ok(())
	}
}

#[async_trait]
impl PaymentRepository for StubPaymentRepository {
	async fn list_all(&self) -> Result<Vec<Payment>, StorageError> {
		self.check()?;
		Ok(self.stored())
	}

	async fn get_by_id(
		&self,
		record_id: RecordId,
	) -> Result<Payment, StorageError> {
		self.check()?;
		self.payments
			.lock()
			.unwrap()
			.iter()
			.find(|p| p.record_id == Some(record_id))
			.cloned()
			.ok_or(StorageError::NotFound)
	}

	async fn create(&self, mut payment: Payment) -> Result<Payment, StorageError> {
		self.check()?;
		payment.record_id = Some(RecordId::generate());
		self.payments.lock().unwrap().push(payment.clone());
		Ok(payment)
	}

	async fn delete(&self, record_id: RecordId) -> Result<(), StorageError> {
		self.check()?;
		let mut payments = self.payments.lock().unwrap();
		let before = payments.len();
		payments.retain(|p| p.record_id != Some(record_id));

		if payments.len() == before {
			return Err(StorageError::NotFound);
		}
		Ok(())
	}

	async fn update(&self, payment: Payment) -> Result<Payment, StorageError> {
		self.check()?;
		let mut payments = self.payments.lock().unwrap();
		let stored = payments
			.iter_mut()
			.find(|p| p.record_id.is_some() && p.record_id == payment.record_id)
			.ok_or(StorageError::NotFound)?;

		*stored = payment;
		Ok(stored.clone())
	}
}
