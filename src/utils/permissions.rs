use crate::{models::Role, utils::AuthState};

/// Route pattern covering every machine detail page. A concrete path such
/// as `/dashboard/machines/42` is rewritten to this pattern before the
/// permission lookup so that one entry covers the whole family.
pub const MACHINE_DETAIL_PATTERN: &str = "/dashboard/machines/:id";

/// Every staff role. No hierarchy: each page lists its allowed roles
/// explicitly.
pub const ALL_STAFF: &[Role] = &[Role::Admin, Role::Secretary, Role::Technician];

/// The static page policy: which roles may view which dashboard page.
pub const PAGE_PERMISSIONS: &[(&str, &[Role])] = &[
	("/dashboard", ALL_STAFF),
	("/dashboard/machines", ALL_STAFF),
	("/dashboard/machines/new", ALL_STAFF),
	(MACHINE_DETAIL_PATTERN, ALL_STAFF),
	("/dashboard/clients", &[Role::Admin, Role::Secretary]),
	("/dashboard/users", &[Role::Admin]),
	("/dashboard/repairs", &[Role::Admin, Role::Technician]),
];

/// Rewrite a machine detail path to its route pattern. Only a final
/// segment made entirely of ASCII digits counts; `/dashboard/machines/new`
/// and non-numeric suffixes are returned unchanged.
pub fn normalize_path(path: &str) -> &str {
	match path.strip_prefix("/dashboard/machines/") {
		Some(id) if !id.is_empty() && id.bytes().all(|byte| byte.is_ascii_digit()) => {
			MACHINE_DETAIL_PATTERN
		}
		_ => path,
	}
}

/// Whether `role` may view the page at `path`.
///
/// Paths without a policy entry are allowed for every role: the table only
/// restricts the pages it lists.
pub fn can_access(role: Role, path: &str) -> bool {
	let normalized = normalize_path(path);

	match PAGE_PERMISSIONS
		.iter()
		.find(|(pattern, _)| *pattern == normalized)
	{
		Some((_, allowed)) => allowed.contains(&role),
		None => true,
	}
}

/// Whether the current session's role is one of `allowed`. False without a
/// session. Drives inline gating of nav entries and buttons.
pub fn has_role(state: &AuthState, allowed: &[Role]) -> bool {
	match state {
		AuthState::LoggedOut => false,
		AuthState::LoggedIn { user, .. } => allowed.contains(&user.role),
	}
}

/// The decision the access gate acts on for one (session, path) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
	/// Render the protected content
	Render,
	/// No session: send the visitor to the login page
	RedirectLogin,
	/// Session exists but the role may not view this page: send them to the
	/// landing page, silently
	RedirectHome,
}

/// Evaluate the gate for a path. Pure; the component wrapper re-runs this
/// on every navigation.
pub fn gate_outcome(state: &AuthState, path: &str) -> GateOutcome {
	match state {
		AuthState::LoggedOut => GateOutcome::RedirectLogin,
		AuthState::LoggedIn { user, .. } if can_access(user.role, path) => GateOutcome::Render,
		AuthState::LoggedIn { .. } => GateOutcome::RedirectHome,
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;
	use crate::models::UserProfile;

	fn session(role: Role) -> AuthState {
		AuthState::LoggedIn {
			token: "tok".into(),
			user: UserProfile {
				id: 1,
				last_name: "Benali".into(),
				first_name: "Karim".into(),
				email: "karim@repair.shop".into(),
				role,
			},
		}
	}

	#[test]
	fn declared_routes_match_table_membership() {
		for role in Role::iter() {
			for (path, allowed) in PAGE_PERMISSIONS {
				assert_eq!(
					can_access(role, path),
					allowed.contains(&role),
					"role {role:?} on {path}"
				);
			}
		}
	}

	#[test]
	fn unknown_paths_are_allowed_for_every_role() {
		// Fail-open is load-bearing behavior, not an accident; see DESIGN.md.
		for role in Role::iter() {
			assert!(can_access(role, "/dashboard/settings"));
			assert!(can_access(role, "/totally/unrelated"));
		}
	}

	#[test]
	fn detail_paths_share_one_policy_entry() {
		assert_eq!(normalize_path("/dashboard/machines/42"), MACHINE_DETAIL_PATTERN);
		assert_eq!(normalize_path("/dashboard/machines/7"), MACHINE_DETAIL_PATTERN);
		for role in Role::iter() {
			assert_eq!(
				can_access(role, "/dashboard/machines/42"),
				can_access(role, "/dashboard/machines/7"),
			);
		}
	}

	#[test]
	fn non_numeric_suffix_does_not_match_the_pattern() {
		assert_eq!(normalize_path("/dashboard/machines/abc"), "/dashboard/machines/abc");
		assert_eq!(normalize_path("/dashboard/machines/new"), "/dashboard/machines/new");
		assert_eq!(normalize_path("/dashboard/machines/"), "/dashboard/machines/");
		assert_eq!(normalize_path("/dashboard/machines/42/edit"), "/dashboard/machines/42/edit");
	}

	#[test]
	fn technician_is_redirected_from_users_page() {
		assert_eq!(
			gate_outcome(&session(Role::Technician), "/dashboard/users"),
			GateOutcome::RedirectHome
		);
	}

	#[test]
	fn admin_renders_users_page() {
		assert_eq!(
			gate_outcome(&session(Role::Admin), "/dashboard/users"),
			GateOutcome::Render
		);
	}

	#[test]
	fn no_session_redirects_to_login() {
		assert_eq!(
			gate_outcome(&AuthState::LoggedOut, "/dashboard/machines"),
			GateOutcome::RedirectLogin
		);
	}

	#[test]
	fn secretary_is_redirected_from_repairs() {
		assert_eq!(
			gate_outcome(&session(Role::Secretary), "/dashboard/repairs"),
			GateOutcome::RedirectHome
		);
	}

	#[test]
	fn has_role_is_false_without_a_session() {
		assert!(!has_role(&AuthState::LoggedOut, ALL_STAFF));
		assert!(has_role(&session(Role::Admin), &[Role::Admin]));
		assert!(!has_role(&session(Role::Technician), &[Role::Admin, Role::Secretary]));
	}
}
