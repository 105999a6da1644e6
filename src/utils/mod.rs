mod auth_state;
mod fetch;
mod permissions;
mod routes;

pub use self::{auth_state::*, fetch::*, permissions::*, routes::*};

/// A trait to extend the [`String`] type with some useful methods that are
/// not available in the standard library.
pub trait StringExt {
	/// Wraps the [`String`] into an option depending on whether it's empty.
	/// Returns [`None`] if the string is empty, otherwise the string wrapped
	/// in a [`Some()`].
	fn some_if_not_empty(self) -> Option<String>;
}

impl StringExt for String {
	fn some_if_not_empty(self) -> Option<String> {
		if self.is_empty() {
			None
		} else {
			Some(self)
		}
	}
}

/// A module containing constants that are used throughout the application.
pub mod constants {
	/// Base URL of the repair-shop REST backend.
	pub const API_BASE_URL: &str = match option_env!("REPAIRDESK_API_URL") {
		Some(url) => url,
		None => "http://localhost:8080/api",
	};
	/// The storage key that holds the bearer token.
	pub const AUTH_TOKEN: &str = "auth_token";
	/// The storage key that holds the JSON-encoded profile of the signed-in
	/// staff member.
	pub const AUTH_USER: &str = "user";
}
