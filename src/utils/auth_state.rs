use codee::string::FromToStringCodec;
use leptos::*;
use leptos_use::storage::use_local_storage;

use crate::{
	models::UserProfile,
	utils::{constants, StringExt},
};

/// The auth state stores the information about the user's login status,
/// along with the data associated with the login, if logged in.
///
/// There is deliberately no partial variant: a stored token without a
/// profile (or the other way round) is treated as logged out.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
	/// The user is logged out
	#[default]
	LoggedOut,
	/// The user is logged in
	LoggedIn {
		/// The bearer token sent with every authenticated request. Opaque to
		/// the client; the backend decides when it stops being valid.
		token: String,
		/// The profile of the signed-in staff member, as returned by the
		/// login exchange.
		user: UserProfile,
	},
}

impl AuthState {
	/// Build the state from the two raw storage entries. Missing or empty
	/// tokens, missing blobs and malformed JSON all collapse to
	/// [`AuthState::LoggedOut`], never an error.
	pub fn from_entries(token: Option<String>, user_blob: Option<String>) -> Self {
		let token = token.and_then(StringExt::some_if_not_empty);
		let user = user_blob.and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok());

		match token.zip(user) {
			Some((token, user)) => AuthState::LoggedIn { token, user },
			None => AuthState::LoggedOut,
		}
	}

	/// Load the auth state from browser storage. This is used to get the
	/// auth state when the app is first loaded.
	pub fn load() -> Self {
		let (token, _, _) = use_local_storage::<String, FromToStringCodec>(constants::AUTH_TOKEN);
		let (user, _, _) = use_local_storage::<String, FromToStringCodec>(constants::AUTH_USER);

		Self::from_entries(
			token.get_untracked().some_if_not_empty(),
			user.get_untracked().some_if_not_empty(),
		)
	}

	/// Save the auth state to browser storage. Both entries are written on
	/// login and removed on logout; clearing an already-empty session is a
	/// no-op.
	pub fn save(&self) {
		let (_, set_token, remove_token) =
			use_local_storage::<String, FromToStringCodec>(constants::AUTH_TOKEN);
		let (_, set_user, remove_user) =
			use_local_storage::<String, FromToStringCodec>(constants::AUTH_USER);

		match self {
			AuthState::LoggedOut => {
				remove_token();
				remove_user();
			}
			AuthState::LoggedIn { token, user } => {
				set_token.set(token.clone());
				match serde_json::to_string(user) {
					Ok(blob) => set_user.set(blob),
					Err(err) => log::error!("failed to encode stored profile: {err}"),
				}
			}
		}
	}

	/// Check if the user is logged in. A pure presence check; the token is
	/// only ever validated by the backend.
	pub fn is_logged_in(&self) -> bool {
		matches!(self, AuthState::LoggedIn { .. })
	}

	/// Check if the user is logged out
	pub fn is_logged_out(&self) -> bool {
		matches!(self, AuthState::LoggedOut)
	}

	/// The stored bearer token, if any
	pub fn token(&self) -> Option<String> {
		match self {
			AuthState::LoggedOut => None,
			AuthState::LoggedIn { token, .. } => Some(token.clone()),
		}
	}

	/// The stored profile, if any
	pub fn user(&self) -> Option<UserProfile> {
		match self {
			AuthState::LoggedOut => None,
			AuthState::LoggedIn { user, .. } => Some(user.clone()),
		}
	}
}

/// The session service handed to every view through the reactive context.
/// Views go through this for all session reads and writes; nothing else in
/// the crate touches the underlying storage keys.
#[derive(Debug, Clone, Copy)]
pub struct AuthStateContext(RwSignal<AuthState>);

impl AuthStateContext {
	/// Create the context from the persisted session and provide it to the
	/// component tree. Called once, at the app root.
	pub fn provide() -> Self {
		let context = Self(create_rw_signal(AuthState::load()));
		provide_context(context);
		context
	}

	/// Reactive read of the whole state
	pub fn get(&self) -> AuthState {
		self.0.get()
	}

	/// Reactive borrow of the state
	pub fn with<U>(&self, f: impl FnOnce(&AuthState) -> U) -> U {
		self.0.with(f)
	}

	/// The current bearer token, tracked
	pub fn token(&self) -> Option<String> {
		self.0.with(|state| state.token())
	}

	/// The current profile, tracked
	pub fn user(&self) -> Option<UserProfile> {
		self.0.with(|state| state.user())
	}

	/// Whether a session currently exists, tracked
	pub fn is_logged_in(&self) -> bool {
		self.0.with(|state| state.is_logged_in())
	}

	/// Establish a session: persists token and profile together and swaps
	/// the in-memory state in the same call.
	pub fn log_in(&self, token: String, user: UserProfile) {
		let state = AuthState::LoggedIn { token, user };
		state.save();
		self.0.set(state);
	}

	/// Destroy the session. Idempotent.
	pub fn log_out(&self) {
		AuthState::LoggedOut.save();
		self.0.set(AuthState::LoggedOut);
	}
}

/// Get the session service from the context
pub fn expect_auth_state() -> AuthStateContext {
	expect_context::<AuthStateContext>()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::Role;

	fn profile_blob() -> String {
		r#"{"id":7,"nom":"Haddad","prenom":"Lina","email":"lina@repair.shop","role":"SECRETAIRE"}"#
			.to_owned()
	}

	#[test]
	fn both_entries_present_yields_logged_in() {
		let state = AuthState::from_entries(Some("tok-123".into()), Some(profile_blob()));

		assert!(state.is_logged_in());
		assert_eq!(state.token().as_deref(), Some("tok-123"));
		let user = state.user().unwrap();
		assert_eq!(user.id, 7);
		assert_eq!(user.first_name, "Lina");
		assert_eq!(user.last_name, "Haddad");
		assert_eq!(user.role, Role::Secretary);
	}

	#[test]
	fn missing_token_is_logged_out() {
		let state = AuthState::from_entries(None, Some(profile_blob()));
		assert_eq!(state, AuthState::LoggedOut);
		assert!(state.token().is_none());
	}

	#[test]
	fn empty_token_is_logged_out() {
		let state = AuthState::from_entries(Some(String::new()), Some(profile_blob()));
		assert_eq!(state, AuthState::LoggedOut);
	}

	#[test]
	fn missing_profile_is_logged_out() {
		let state = AuthState::from_entries(Some("tok-123".into()), None);
		assert_eq!(state, AuthState::LoggedOut);
		assert!(state.user().is_none());
	}

	#[test]
	fn malformed_profile_degrades_to_logged_out() {
		let state = AuthState::from_entries(Some("tok-123".into()), Some("{not json".into()));
		assert_eq!(state, AuthState::LoggedOut);
	}

	#[test]
	fn profile_blob_round_trips() {
		let state = AuthState::from_entries(Some("tok".into()), Some(profile_blob()));
		let user = state.user().unwrap();

		let reencoded = serde_json::to_string(&user).unwrap();
		let restored = AuthState::from_entries(Some("tok".into()), Some(reencoded));
		assert_eq!(restored.user().unwrap(), user);
	}

	#[test]
	fn no_entries_is_logged_out_and_stable() {
		// Clearing an already-empty session leaves the same state behind.
		let once = AuthState::from_entries(None, None);
		let twice = AuthState::from_entries(None, None);
		assert_eq!(once, AuthState::LoggedOut);
		assert_eq!(once, twice);
	}
}
