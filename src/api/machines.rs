use reqwest::Method;

use crate::{
	models::{Machine, MachineRequest, MachineStatus},
	utils::{json_body, request_empty, request_json, ApiError},
};

/// List every repair ticket
pub async fn list_machines(token: Option<String>) -> Result<Vec<Machine>, ApiError> {
	request_json(Method::GET, "/machines", &[], token, None).await
}

/// Fetch one repair ticket
pub async fn get_machine(token: Option<String>, id: i64) -> Result<Machine, ApiError> {
	request_json(Method::GET, &format!("/machines/{id}"), &[], token, None).await
}

/// List the tickets currently in one status
pub async fn list_machines_by_status(
	token: Option<String>,
	status: MachineStatus,
) -> Result<Vec<Machine>, ApiError> {
	request_json(
		Method::GET,
		&format!("/machines/statut/{}", status.as_wire()),
		&[],
		token,
		None,
	)
	.await
}

/// List the tickets belonging to one client
pub async fn list_machines_by_client(
	token: Option<String>,
	client_id: i64,
) -> Result<Vec<Machine>, ApiError> {
	request_json(
		Method::GET,
		&format!("/machines/client/{client_id}"),
		&[],
		token,
		None,
	)
	.await
}

/// Substring search across brand, model, serial and client
pub async fn search_machines(
	token: Option<String>,
	keyword: &str,
) -> Result<Vec<Machine>, ApiError> {
	request_json(
		Method::GET,
		"/machines/search",
		&[("keyword", keyword)],
		token,
		None,
	)
	.await
}

/// Open a repair ticket
pub async fn create_machine(
	token: Option<String>,
	request: &MachineRequest,
) -> Result<Machine, ApiError> {
	request_json(
		Method::POST,
		"/machines",
		&[],
		token,
		Some(json_body(request)?),
	)
	.await
}

/// Update a repair ticket
pub async fn update_machine(
	token: Option<String>,
	id: i64,
	request: &MachineRequest,
) -> Result<Machine, ApiError> {
	request_json(
		Method::PUT,
		&format!("/machines/{id}"),
		&[],
		token,
		Some(json_body(request)?),
	)
	.await
}

/// Delete a repair ticket
pub async fn delete_machine(token: Option<String>, id: i64) -> Result<(), ApiError> {
	request_empty(Method::DELETE, &format!("/machines/{id}"), token, None).await
}
