use reqwest::Method;

use crate::{
	models::{Client, ClientRequest},
	utils::{json_body, request_empty, request_json, ApiError},
};

/// List every client
pub async fn list_clients(token: Option<String>) -> Result<Vec<Client>, ApiError> {
	request_json(Method::GET, "/clients", &[], token, None).await
}

/// Fetch one client
pub async fn get_client(token: Option<String>, id: i64) -> Result<Client, ApiError> {
	request_json(Method::GET, &format!("/clients/{id}"), &[], token, None).await
}

/// Substring search across client names and contact fields
pub async fn search_clients(token: Option<String>, keyword: &str) -> Result<Vec<Client>, ApiError> {
	request_json(
		Method::GET,
		"/clients/search",
		&[("keyword", keyword)],
		token,
		None,
	)
	.await
}

/// Register a client
pub async fn create_client(
	token: Option<String>,
	request: &ClientRequest,
) -> Result<Client, ApiError> {
	request_json(
		Method::POST,
		"/clients",
		&[],
		token,
		Some(json_body(request)?),
	)
	.await
}

/// Update a client
pub async fn update_client(
	token: Option<String>,
	id: i64,
	request: &ClientRequest,
) -> Result<Client, ApiError> {
	request_json(
		Method::PUT,
		&format!("/clients/{id}"),
		&[],
		token,
		Some(json_body(request)?),
	)
	.await
}

/// Delete a client
pub async fn delete_client(token: Option<String>, id: i64) -> Result<(), ApiError> {
	request_empty(Method::DELETE, &format!("/clients/{id}"), token, None).await
}
