use serde::{Deserialize, Serialize};

pub const EMPTY_COLLECTION_STATUS: &str =
	"there are not any payments in the collection";
pub const DELETED_STATUS: &str = "deleted";

/// `{"status": ...}` body shared by errors and informational replies.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatusEnvelope {
	pub status: String,
}

impl StatusEnvelope {
	pub fn new(status: impl Into<String>) -> Self {
		Self {
			status: status.into(),
		}
	}
}
