use serde::{Deserialize, Serialize};

/// A client of the shop, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
	pub id: i64,
	#[serde(rename = "nom")]
	pub last_name: String,
	#[serde(rename = "prenom")]
	pub first_name: String,
	#[serde(rename = "adresse")]
	pub address: String,
	#[serde(rename = "numero")]
	pub phone: String,
	#[serde(default)]
	pub email: Option<String>,
	/// Free-form notes
	#[serde(rename = "autres", default)]
	pub notes: Option<String>,
	#[serde(rename = "createdAt", default)]
	pub created_at: Option<String>,
}

impl Client {
	/// "Given Family" display form
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}

/// Payload for creating or updating a client.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientRequest {
	#[serde(rename = "nom")]
	pub last_name: String,
	#[serde(rename = "prenom")]
	pub first_name: String,
	#[serde(rename = "adresse")]
	pub address: String,
	#[serde(rename = "numero")]
	pub phone: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(rename = "autres", skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}
