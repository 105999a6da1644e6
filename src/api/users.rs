use reqwest::Method;

use crate::{
	models::{Role, User, UserRequest},
	utils::{json_body, request_empty, request_json, ApiError},
};

/// List every staff account
pub async fn list_users(token: Option<String>) -> Result<Vec<User>, ApiError> {
	request_json(Method::GET, "/users", &[], token, None).await
}

/// Fetch one staff account
pub async fn get_user(token: Option<String>, id: i64) -> Result<User, ApiError> {
	request_json(Method::GET, &format!("/users/{id}"), &[], token, None).await
}

/// List the staff accounts holding one role
pub async fn list_users_by_role(token: Option<String>, role: Role) -> Result<Vec<User>, ApiError> {
	request_json(
		Method::GET,
		&format!("/users/role/{}", role.as_wire()),
		&[],
		token,
		None,
	)
	.await
}

/// Create a staff account
pub async fn create_user(token: Option<String>, request: &UserRequest) -> Result<User, ApiError> {
	request_json(Method::POST, "/users", &[], token, Some(json_body(request)?)).await
}

/// Update a staff account
pub async fn update_user(
	token: Option<String>,
	id: i64,
	request: &UserRequest,
) -> Result<User, ApiError> {
	request_json(
		Method::PUT,
		&format!("/users/{id}"),
		&[],
		token,
		Some(json_body(request)?),
	)
	.await
}

/// Delete a staff account
pub async fn delete_user(token: Option<String>, id: i64) -> Result<(), ApiError> {
	request_empty(Method::DELETE, &format!("/users/{id}"), token, None).await
}
