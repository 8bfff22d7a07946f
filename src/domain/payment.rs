use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Storage-assigned identifier of a payment, written on the wire as a
/// 24-hex-digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(ObjectId);

impl RecordId {
	pub fn generate() -> Self {
		Self(ObjectId::new())
	}

	pub fn object_id(&self) -> ObjectId {
		self.0
	}
}

impl From<ObjectId> for RecordId {
	fn from(object_id: ObjectId) -> Self {
		Self(object_id)
	}
}

impl fmt::Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.to_hex())
	}
}

impl FromStr for RecordId {
	type Err = bson::oid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ObjectId::parse_str(s).map(Self)
	}
}

impl Serialize for RecordId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0.to_hex())
	}
}

impl<'de> Deserialize<'de> for RecordId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let hex = String::deserialize(deserializer)?;
		hex.parse().map_err(serde::de::Error::custom)
	}
}

fn is_zero_f64(value: &f64) -> bool {
	*value == 0.0
}

fn is_zero_i64(value: &i64) -> bool {
	*value == 0
}

/// Decodes JSON `null` as the field's zero value, same as an absent key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An empty or null `_id` means "no record id". Any other value must be
/// 24 hex digits.
fn optional_record_id<'de, D: Deserializer<'de>>(
	deserializer: D,
) -> Result<Option<RecordId>, D::Error> {
	match Option::<String>::deserialize(deserializer)? {
		None => Ok(None),
		Some(hex) if hex.is_empty() => Ok(None),
		Some(hex) => hex.parse().map(Some).map_err(serde::de::Error::custom),
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Payment {
	#[serde(
		rename = "_id",
		skip_serializing_if = "Option::is_none",
		deserialize_with = "optional_record_id"
	)]
	pub record_id:       Option<RecordId>,
	#[serde(rename = "id", skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub external_id:     String,
	#[serde(rename = "type", skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub resource_type:   String,
	#[serde(deserialize_with = "null_default")]
	pub version:         i64,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub organisation_id: String,
	#[serde(deserialize_with = "null_default")]
	pub attributes:      Attributes,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Attributes {
	#[serde(skip_serializing_if = "is_zero_f64", deserialize_with = "null_default")]
	pub amount:                  f64,
	#[serde(deserialize_with = "null_default")]
	pub beneficiary_party:       Account,
	#[serde(deserialize_with = "null_default")]
	pub charges_information:     ChargesInformation,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub currency:                String,
	#[serde(deserialize_with = "null_default")]
	pub debtor_party:            Account,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub end_to_end_reference:    String,
	#[serde(deserialize_with = "null_default")]
	pub fx:                      Fx,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub numeric_reference:       String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub payment_id:              String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub payment_purpose:         String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub payment_scheme:          String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub payment_type:            String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub processing_date:         String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub reference:               String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub scheme_payment_sub_type: String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub scheme_payment_type:     String,
	#[serde(deserialize_with = "null_default")]
	pub sponsor_party:           Sponsor,
}

/// Beneficiary or debtor side of a payment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Account {
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub account_name:        String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub account_number:      String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub account_number_code: String,
	#[serde(skip_serializing_if = "is_zero_i64", deserialize_with = "null_default")]
	pub account_type:        i64,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub address:             String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub bank_id:             String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub bank_id_code:        String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub name:                String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AmountCurrency {
	#[serde(skip_serializing_if = "is_zero_f64", deserialize_with = "null_default")]
	pub amount:   f64,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChargesInformation {
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub bearer_code:               String,
	#[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
	pub sender_charges:            Vec<AmountCurrency>,
	#[serde(skip_serializing_if = "is_zero_f64", deserialize_with = "null_default")]
	pub receiver_charges_amount:   f64,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub receiver_charges_currency: String,
}

/// Foreign-exchange terms. The rate stays a string so the caller's
/// precision is kept as sent.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Fx {
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub contract_reference: String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub exchange_rate:      String,
	#[serde(skip_serializing_if = "is_zero_f64", deserialize_with = "null_default")]
	pub original_amount:    f64,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub original_currency:  String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Sponsor {
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub account_number: String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub bank_id:        String,
	#[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
	pub bank_id_code:   String,
}
