use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Staff role. A closed set; permission checks match on it exhaustively so
/// adding a role is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum Role {
	/// Full access, including account management
	#[serde(rename = "ADMIN")]
	Admin,
	/// Front desk: intake, clients, machines
	#[serde(rename = "SECRETAIRE")]
	#[default]
	Secretary,
	/// Workshop: machines and the repair worklist
	#[serde(rename = "TECHNICIEN")]
	Technician,
}

impl Role {
	/// The value the backend uses in path segments and payloads
	pub fn as_wire(&self) -> &'static str {
		match self {
			Self::Admin => "ADMIN",
			Self::Secretary => "SECRETAIRE",
			Self::Technician => "TECHNICIEN",
		}
	}
}

impl Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Admin => "Admin",
				Self::Secretary => "Secretary",
				Self::Technician => "Technician",
			}
		)
	}
}

/// The slice of a staff account that the session stores after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Account id
	pub id: i64,
	/// Family name
	#[serde(rename = "nom")]
	pub last_name: String,
	/// Given name
	#[serde(rename = "prenom")]
	pub first_name: String,
	/// Login email
	pub email: String,
	/// Staff role, drives every access decision
	pub role: Role,
}

impl UserProfile {
	/// "Given Family" display form
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	/// Two-letter avatar initials
	pub fn initials(&self) -> String {
		self.last_name
			.chars()
			.take(1)
			.chain(self.first_name.chars().take(1))
			.collect::<String>()
			.to_uppercase()
	}
}

/// A full staff account as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: i64,
	#[serde(rename = "nom")]
	pub last_name: String,
	#[serde(rename = "prenom")]
	pub first_name: String,
	#[serde(rename = "adresse", default)]
	pub address: Option<String>,
	#[serde(rename = "numero", default)]
	pub phone: Option<String>,
	pub email: String,
	pub role: Role,
	#[serde(default)]
	pub active: bool,
}

impl User {
	/// "Given Family" display form
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}

/// Payload for creating or updating a staff account. The password is only
/// sent when set; the backend keeps the old one otherwise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserRequest {
	#[serde(rename = "nom")]
	pub last_name: String,
	#[serde(rename = "prenom")]
	pub first_name: String,
	#[serde(rename = "adresse")]
	pub address: String,
	#[serde(rename = "numero")]
	pub phone: String,
	pub email: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	pub role: Role,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn role_round_trips_through_wire_values() {
		for (role, wire) in [
			(Role::Admin, "\"ADMIN\""),
			(Role::Secretary, "\"SECRETAIRE\""),
			(Role::Technician, "\"TECHNICIEN\""),
		] {
			assert_eq!(serde_json::to_string(&role).unwrap(), wire);
			assert_eq!(serde_json::from_str::<Role>(wire).unwrap(), role);
		}
	}

	#[test]
	fn profile_uses_backend_field_names() {
		let profile: UserProfile = serde_json::from_str(
			r#"{"id":3,"nom":"Mercier","prenom":"Paul","email":"paul@repair.shop","role":"TECHNICIEN"}"#,
		)
		.unwrap();

		assert_eq!(profile.full_name(), "Paul Mercier");
		assert_eq!(profile.initials(), "MP");
		assert_eq!(profile.role, Role::Technician);
	}

	#[test]
	fn user_request_omits_unset_password() {
		let request = UserRequest {
			last_name: "Mercier".into(),
			first_name: "Paul".into(),
			address: "12 rue des Lilas".into(),
			phone: "0601020304".into(),
			email: "paul@repair.shop".into(),
			password: None,
			role: Role::Technician,
		};

		let value = serde_json::to_value(&request).unwrap();
		assert!(value.get("password").is_none());
		assert_eq!(value["nom"], "Mercier");
		assert_eq!(value["role"], "TECHNICIEN");
	}
}
