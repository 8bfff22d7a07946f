pub const DATABASE_NAME: &str = "test";
pub const PAYMENTS_COLLECTION: &str = "payments";
/// Caller-supplied payment id, kept unique across the collection.
pub const UNIQUE_INDEX_FIELD: &str = "id";
pub const APP_NAME: &str = "payments-api";
