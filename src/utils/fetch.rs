use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::utils::constants;

/// What a backend call can fail with. Every variant is surfaced to the
/// user as a notification; none of them propagate as a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ApiError {
	/// The backend answered with a non-2xx status. `message` carries the
	/// response body text, which is what the user gets to see.
	#[error("{message}")]
	Api {
		/// HTTP status code of the response
		status: u16,
		/// Response body text, or the status line when the body was empty
		message: String,
	},
	/// The request never produced a response
	#[error("network error: {0}")]
	Network(String),
	/// The response body was not the JSON we expected
	#[error("unexpected response: {0}")]
	Decode(String),
}

/// Encode a request body, mapping encoder failures into [`ApiError`].
pub fn json_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
	serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn send(
	method: Method,
	path: &str,
	query: &[(&str, &str)],
	token: Option<String>,
	body: Option<Value>,
) -> Result<reqwest::Response, ApiError> {
	let url = format!("{}{}", constants::API_BASE_URL, path);

	let mut builder = reqwest::Client::new()
		.request(method, url)
		.header(header::CONTENT_TYPE, "application/json");
	if !query.is_empty() {
		builder = builder.query(query);
	}
	// Absent token simply means no Authorization header; rejecting the
	// request is the backend's job.
	if let Some(token) = token {
		builder = builder.bearer_auth(token);
	}
	if let Some(body) = &body {
		builder = builder.json(body);
	}

	let response = builder
		.send()
		.await
		.map_err(|err| ApiError::Network(err.to_string()))?;

	let status = response.status();
	if status.is_success() {
		Ok(response)
	} else {
		let message = response.text().await.unwrap_or_default();
		Err(ApiError::Api {
			status: status.as_u16(),
			message: if message.is_empty() {
				status.to_string()
			} else {
				message
			},
		})
	}
}

/// Make a request and deserialize the JSON response body.
pub async fn request_json<T: DeserializeOwned>(
	method: Method,
	path: &str,
	query: &[(&str, &str)],
	token: Option<String>,
	body: Option<Value>,
) -> Result<T, ApiError> {
	send(method, path, query, token, body)
		.await?
		.json::<T>()
		.await
		.map_err(|err| ApiError::Decode(err.to_string()))
}

/// Make a request and discard the response body. Used for deletes.
pub async fn request_empty(
	method: Method,
	path: &str,
	token: Option<String>,
	body: Option<Value>,
) -> Result<(), ApiError> {
	send(method, path, &[], token, body).await.map(|_| ())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_error_displays_the_backend_message() {
		let err = ApiError::Api {
			status: 403,
			message: "Accès refusé".into(),
		};
		assert_eq!(err.to_string(), "Accès refusé");
	}

	#[test]
	fn json_body_encodes_plain_structs() {
		#[derive(serde::Serialize)]
		struct Probe {
			keyword: &'static str,
		}

		let value = json_body(&Probe { keyword: "hp" }).unwrap();
		assert_eq!(value, serde_json::json!({ "keyword": "hp" }));
	}
}
