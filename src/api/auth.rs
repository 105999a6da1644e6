use reqwest::Method;

use crate::{
	models::{LoginRequest, LoginResponse},
	utils::{json_body, request_json, ApiError},
};

/// Exchange credentials for a token and the signed-in profile. The only
/// endpoint called without a bearer token.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
	request_json(
		Method::POST,
		"/auth/login",
		&[],
		None,
		Some(json_body(request)?),
	)
	.await
}
