use serde::{Deserialize, Serialize};

use crate::models::{Role, UserProfile};

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
	pub email: String,
	pub password: String,
}

/// The flat payload the login endpoint answers with. Every field is
/// optional: a nominally successful response without a token establishes
/// no session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
	#[serde(default)]
	pub id: Option<i64>,
	#[serde(rename = "nom", default)]
	pub last_name: Option<String>,
	#[serde(rename = "prenom", default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub role: Option<Role>,
	#[serde(default)]
	pub token: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
}

impl LoginResponse {
	/// Split the payload into the (token, profile) pair the session stores.
	/// `None` when the token or any profile field is missing; the caller
	/// surfaces that as a failed login.
	pub fn into_session(self) -> Option<(String, UserProfile)> {
		let token = self.token.filter(|token| !token.is_empty())?;

		Some((
			token,
			UserProfile {
				id: self.id?,
				last_name: self.last_name?,
				first_name: self.first_name?,
				email: self.email?,
				role: self.role?,
			},
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_payload_becomes_a_session() {
		let response: LoginResponse = serde_json::from_str(
			r#"{"id":1,"nom":"Benali","prenom":"Karim","email":"karim@repair.shop",
			    "role":"ADMIN","token":"jwt-abc","message":"Connexion réussie"}"#,
		)
		.unwrap();

		let (token, user) = response.into_session().unwrap();
		assert_eq!(token, "jwt-abc");
		assert_eq!(user.role, Role::Admin);
		assert_eq!(user.full_name(), "Karim Benali");
	}

	#[test]
	fn missing_token_yields_no_session() {
		let response: LoginResponse = serde_json::from_str(
			r#"{"id":1,"nom":"Benali","prenom":"Karim","email":"karim@repair.shop","role":"ADMIN"}"#,
		)
		.unwrap();

		assert!(response.into_session().is_none());
	}

	#[test]
	fn empty_token_yields_no_session() {
		let response = LoginResponse {
			token: Some(String::new()),
			..Default::default()
		};
		assert!(response.into_session().is_none());
	}
}
