use std::time::Duration;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use futures::TryStreamExt;
use log::debug;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};

use crate::domain::payment::{Payment, RecordId};
use crate::domain::repository::{PaymentRepository, StorageError};
use crate::infrastructure::config::mongo::{
	APP_NAME, DATABASE_NAME, PAYMENTS_COLLECTION,
};
use crate::infrastructure::config::settings::Config;

impl From<mongodb::error::Error> for StorageError {
	fn from(err: mongodb::error::Error) -> Self {
		StorageError::database(err.to_string())
	}
}

impl From<bson::ser::Error> for StorageError {
	fn from(err: bson::ser::Error) -> Self {
		StorageError::database(err.to_string())
	}
}

impl From<bson::de::Error> for StorageError {
	fn from(err: bson::de::Error) -> Self {
		StorageError::database(err.to_string())
	}
}

impl From<bson::document::ValueAccessError> for StorageError {
	fn from(err: bson::document::ValueAccessError) -> Self {
		StorageError::database(err.to_string())
	}
}

/// The record id lives under `_id` as a native ObjectId; the rest of the
/// payment is stored with its wire field names.
fn to_document(
	object_id: ObjectId,
	payment: &Payment,
) -> Result<Document, StorageError> {
	let mut document = bson::to_document(payment)?;
	document.insert("_id", object_id);
	Ok(document)
}

fn from_document(mut document: Document) -> Result<Payment, StorageError> {
	let object_id = document.get_object_id("_id")?;
	document.remove("_id");

	let mut payment: Payment = bson::from_document(document)?;
	payment.record_id = Some(RecordId::from(object_id));
	Ok(payment)
}

fn by_id(object_id: ObjectId) -> Document {
	doc! { "_id": object_id }
}

/// Bounds how long the driver waits to reach a server, both for the TCP
/// connect and for picking a server per operation. Operations on an open
/// connection are not time-limited.
fn apply_settings(options: &mut ClientOptions, config: &Config) {
	let connect_timeout = Duration::from_secs(config.mongo_connect_timeout_secs);

	options.app_name = Some(APP_NAME.to_string());
	options.connect_timeout = Some(connect_timeout);
	options.server_selection_timeout = Some(connect_timeout);
	options.retry_reads = Some(false);
	options.retry_writes = Some(false);
}

/// Payment storage backed by one MongoDB collection.
///
/// The driver pools connections: each call checks one out and hands it
/// back when the call finishes, whichever way it finishes.
#[derive(Clone)]
pub struct MongoPaymentRepository {
	collection: Collection<Document>,
}

impl MongoPaymentRepository {
	pub fn new(client: &Client) -> Self {
		Self {
			collection: client
				.database(DATABASE_NAME)
				.collection(PAYMENTS_COLLECTION),
		}
	}

	pub async fn connect(config: &Config) -> Result<Self, StorageError> {
		let mut options = ClientOptions::parse(config.mongo_url()).await?;
		apply_settings(&mut options, config);

		let client = Client::with_options(options)?;
		Ok(Self::new(&client))
	}

	/// Creates a unique, sparse index on `field`. Records without the field
	/// are left out of the index.
	pub async fn ensure_unique_index(&self, field: &str) -> Result<(), StorageError> {
		let mut keys = Document::new();
		keys.insert(field, 1);

		let index = IndexModel::builder()
			.keys(keys)
			.options(IndexOptions::builder().unique(true).sparse(true).build())
			.build();

		let created = self.collection.create_index(index, None).await?;
		debug!("Ensured unique index {} on {PAYMENTS_COLLECTION}", created.index_name);
		Ok(())
	}
}

#[async_trait]
impl PaymentRepository for MongoPaymentRepository {
	async fn list_all(&self) -> Result<Vec<Payment>, StorageError> {
		debug!("Listing all documents in {PAYMENTS_COLLECTION}");
		let documents: Vec<Document> =
			self.collection.find(doc! {}, None).await?.try_collect().await?;

		documents.into_iter().map(from_document).collect()
	}

	async fn get_by_id(
		&self,
		record_id: RecordId,
	) -> Result<Payment, StorageError> {
		debug!("Finding payment {record_id}");
		self.collection
			.find_one(by_id(record_id.object_id()), None)
			.await?
			.ok_or(StorageError::NotFound)
			.and_then(from_document)
	}

	async fn create(&self, mut payment: Payment) -> Result<Payment, StorageError> {
		let record_id = RecordId::generate();
		payment.record_id = Some(record_id);

		debug!("Inserting payment {record_id}");
		self.collection
			.insert_one(to_document(record_id.object_id(), &payment)?, None)
			.await?;

		Ok(payment)
	}

	async fn delete(&self, record_id: RecordId) -> Result<(), StorageError> {
		debug!("Removing payment {record_id}");
		let result = self
			.collection
			.delete_one(by_id(record_id.object_id()), None)
			.await?;

		if result.deleted_count == 0 {
			return Err(StorageError::NotFound);
		}
		Ok(())
	}

	async fn update(&self, payment: Payment) -> Result<Payment, StorageError> {
		let record_id = payment.record_id.ok_or(StorageError::NotFound)?;
		let object_id = record_id.object_id();

		debug!("Replacing payment {record_id}");
		let result = self
			.collection
			.replace_one(by_id(object_id), to_document(object_id, &payment)?, None)
			.await?;

		if result.matched_count == 0 {
			return Err(StorageError::NotFound);
		}

		self.get_by_id(record_id).await
	}
}
